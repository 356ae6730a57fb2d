use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde_json::Value;

use aud_core::enums::Role;
use aud_core::identity::SessionIdentity;

use crate::error::AuthError;

/// Claims read from the bearer token payload.
///
/// Decoded without signature verification. Numeric claims are accepted either
/// as JSON numbers or as numeric strings, which is how the backend emits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudClaims {
    /// Raw token, sent back as the bearer credential.
    pub raw_jwt: String,
    /// Role id (`sid` claim).
    pub role_id: Option<i64>,
    /// User id (`sub` claim).
    pub user_id: Option<i64>,
    /// Company id (`typ` claim).
    pub company_id: Option<i64>,
    /// Display name (`name` claim).
    pub name: Option<String>,
    /// Expiry (`exp` claim), informational only.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AudClaims {
    /// Convert to a lightweight `SessionIdentity` for cross-crate passing.
    #[must_use]
    pub fn to_identity(&self) -> SessionIdentity {
        SessionIdentity {
            role_id: self.role_id,
            user_id: self.user_id,
            company_id: self.company_id,
            display_name: self.name.clone(),
        }
    }

    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self.role_id {
            Some(id) => Role::from_id(id),
            None => None,
        }
    }

    /// Whether the `exp` claim lies in the past. Tokens without `exp` never expire.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| exp <= Utc::now())
    }
}

/// Decode the payload segment of a JWT without verifying its signature.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the token is not three dot-separated
/// segments, the payload is not base64url, or it is not a JSON object.
pub fn decode_unverified(jwt: &str) -> Result<AudClaims, AuthError> {
    let jwt = jwt.trim();
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::InvalidToken("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    let value: Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidToken(format!("JSON parse failed: {e}")))?;
    if !value.is_object() {
        return Err(AuthError::InvalidToken("payload is not a JSON object".into()));
    }

    Ok(AudClaims {
        raw_jwt: jwt.to_string(),
        role_id: numeric_claim(&value["sid"]),
        user_id: numeric_claim(&value["sub"]),
        company_id: numeric_claim(&value["typ"]),
        name: value["name"].as_str().map(str::to_string),
        expires_at: numeric_claim(&value["exp"]).and_then(|exp| DateTime::from_timestamp(exp, 0)),
    })
}

fn numeric_claim(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt(payload: &str) -> String {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(payload);
        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("fake_sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn decodes_string_claims() {
        let jwt = make_jwt(r#"{"sid":"4","sub":"17","typ":"3","name":"Paola"}"#);
        let claims = decode_unverified(&jwt).unwrap();
        assert_eq!(claims.role_id, Some(4));
        assert_eq!(claims.user_id, Some(17));
        assert_eq!(claims.company_id, Some(3));
        assert_eq!(claims.name.as_deref(), Some("Paola"));
        assert_eq!(claims.role(), Some(Role::ClientResponsible));
        assert_eq!(claims.expires_at, None);
        assert!(!claims.is_expired());
    }

    #[test]
    fn decodes_numeric_claims_and_expiry() {
        let exp = Utc::now().timestamp() - 60;
        let jwt = make_jwt(&format!(r#"{{"sid":1,"sub":2,"exp":{exp}}}"#));
        let claims = decode_unverified(&jwt).unwrap();
        assert_eq!(claims.role(), Some(Role::Administrator));
        assert_eq!(claims.company_id, None);
        assert!(claims.is_expired());
    }

    #[test]
    fn non_numeric_role_is_unknown() {
        let jwt = make_jwt(r#"{"sid":"admin","sub":"9"}"#);
        let claims = decode_unverified(&jwt).unwrap();
        assert_eq!(claims.role_id, None);
        assert_eq!(claims.role(), None);
        assert_eq!(claims.to_identity().role(), None);
    }

    #[test]
    fn out_of_range_role_decodes_but_maps_to_none() {
        let jwt = make_jwt(r#"{"sid":"8"}"#);
        let claims = decode_unverified(&jwt).unwrap();
        assert_eq!(claims.role_id, Some(8));
        assert_eq!(claims.role(), None);
    }

    #[test]
    fn identity_carries_every_field() {
        let jwt = make_jwt(r#"{"sid":"3","sub":"21","typ":"1","name":"Jorge"}"#);
        let identity = decode_unverified(&jwt).unwrap().to_identity();
        assert_eq!(identity.role_id, Some(3));
        assert_eq!(identity.user_id, Some(21));
        assert_eq!(identity.company_id, Some(1));
        assert_eq!(identity.display_name.as_deref(), Some("Jorge"));
    }

    #[test]
    fn rejects_wrong_segment_count() {
        let err = decode_unverified("not-a-jwt").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn rejects_bad_base64() {
        let err = decode_unverified("header.!!!invalid!!!.signature").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }

    #[test]
    fn rejects_non_object_payload() {
        let jwt = make_jwt("[1,2,3]");
        let err = decode_unverified(&jwt).unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
    }
}
