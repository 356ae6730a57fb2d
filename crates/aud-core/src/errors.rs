//! Cross-cutting error types.
//!
//! Transport errors live in `aud-client`, credential errors in `aud-auth`.
//! A unified error is deferred to `aud-cli`, where everything converges on
//! `anyhow`.

use thiserror::Error;

use crate::access::Action;
use crate::enums::Role;

/// Errors that can be raised by any crate of the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// The session role does not permit the requested action.
    #[error("Role '{role}' is not permitted to {action}")]
    Forbidden { role: String, action: Action },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Build a [`CoreError::Forbidden`] for an optional role.
    ///
    /// A missing role (token without a recognised `sid` claim) is reported as
    /// `unknown`.
    #[must_use]
    pub fn forbidden(role: Option<Role>, action: Action) -> Self {
        Self::Forbidden {
            role: role.map_or_else(|| "unknown".to_string(), |r| r.as_str().to_string()),
            action,
        }
    }
}
