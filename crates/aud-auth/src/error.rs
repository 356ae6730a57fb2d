use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `aud auth login`")]
    NotAuthenticated,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("login rejected ({status}): {message}")]
    LoginRejected { status: u16, message: String },

    #[error("login request failed: {0}")]
    LoginFailed(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),
}
