use serde::{Deserialize, Serialize};

use crate::claims::{AudClaims, decode_unverified};
use crate::error::AuthError;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Exchange username and password for a bearer token.
///
/// Posts to `{base_url}/auth/login` and decodes the returned token. The token
/// is NOT persisted; see [`login_and_store`].
///
/// # Errors
///
/// Returns `AuthError::LoginRejected` for a non-success status,
/// `AuthError::LoginFailed` for transport or body errors, and
/// `AuthError::InvalidToken` if the returned token cannot be decoded.
pub async fn login(
    http: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<AudClaims, AuthError> {
    let url = format!("{}/auth/login", base_url.trim_end_matches('/'));
    tracing::debug!(%url, username, "login request");

    let response = http
        .post(&url)
        .json(&LoginRequest { username, password })
        .send()
        .await
        .map_err(|e| AuthError::LoginFailed(format!("POST {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            "invalid credentials".to_string()
        } else {
            body.trim().to_string()
        };
        return Err(AuthError::LoginRejected {
            status: status.as_u16(),
            message,
        });
    }

    let body: LoginResponse = response
        .json()
        .await
        .map_err(|e| AuthError::LoginFailed(format!("parse login response: {e}")))?;

    decode_unverified(&body.token)
}

/// [`login`], then persist the token with [`crate::token_store::store`].
///
/// # Errors
///
/// Same as [`login`], plus `AuthError::TokenStoreError` if storage fails.
pub async fn login_and_store(
    http: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<AudClaims, AuthError> {
    let claims = login(http, base_url, username, password).await?;
    crate::token_store::store(&claims.raw_jwt)?;
    Ok(claims)
}
