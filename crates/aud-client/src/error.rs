//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend REST API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the bearer token (or none was sent).
    #[error("unauthorized: run `aud auth login`")]
    Unauthorized,

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// A response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Local file I/O for uploads and downloads.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Client-side input rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
