//! # aud-auth
//!
//! Bearer-token session handling for the audit client.
//!
//! Provides username/password login against the backend, OS keychain token
//! storage (`keyring`) with env var and file fallbacks, and decoding of the
//! token payload into a [`aud_core::identity::SessionIdentity`].
//!
//! The token signature is never verified here. Decoded claims only decide what
//! the client offers; the backend authorizes every request on its own.

pub mod claims;
pub mod error;
pub mod login;
pub mod session;
pub mod token_store;

pub use claims::AudClaims;
pub use error::AuthError;

/// Resolve the stored bearer token, if any.
///
/// Priority: keyring → env var → file. Does NOT decode the token.
#[must_use]
pub fn resolve_token() -> Option<String> {
    token_store::load()
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
