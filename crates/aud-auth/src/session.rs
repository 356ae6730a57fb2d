//! Session resolution from the stored token.

use crate::claims::{AudClaims, decode_unverified};
use crate::error::AuthError;
use crate::token_store;

/// Result of inspecting a stored token.
#[derive(Debug)]
pub enum SessionState {
    /// A decodable token is present.
    Active(AudClaims),
    /// No token is stored.
    Missing,
    /// A token is stored but cannot be decoded.
    Invalid(AuthError),
}

/// Classify a token without touching the store.
#[must_use]
pub fn evaluate(token: Option<&str>) -> SessionState {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return SessionState::Missing;
    };
    match decode_unverified(token) {
        Ok(claims) => {
            if claims.is_expired() {
                tracing::warn!(
                    expires_at = ?claims.expires_at,
                    "stored token has expired; the backend may reject requests until `aud auth login`"
                );
            }
            SessionState::Active(claims)
        }
        Err(error) => SessionState::Invalid(error),
    }
}

/// Resolve the current session from the token store.
///
/// A token that fails to decode is removed from the store, and the caller is
/// told to log in again.
///
/// # Errors
///
/// Returns `AuthError::NotAuthenticated` when no usable token is stored, or
/// `AuthError::TokenStoreError` if clearing a corrupt token fails.
pub fn current() -> Result<AudClaims, AuthError> {
    match evaluate(token_store::load().as_deref()) {
        SessionState::Active(claims) => Ok(claims),
        SessionState::Missing => Err(AuthError::NotAuthenticated),
        SessionState::Invalid(error) => {
            tracing::warn!(%error, "stored token is unreadable; clearing it");
            token_store::delete()?;
            Err(AuthError::NotAuthenticated)
        }
    }
}

/// Like [`current`], but a missing token is not an error.
///
/// # Errors
///
/// Same as [`current`], except that `NotAuthenticated` maps to `Ok(None)`.
pub fn optional() -> Result<Option<AudClaims>, AuthError> {
    match current() {
        Ok(claims) => Ok(Some(claims)),
        Err(AuthError::NotAuthenticated) => Ok(None),
        Err(error) => Err(error),
    }
}
