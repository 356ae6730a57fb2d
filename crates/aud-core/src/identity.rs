use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Identity of the signed-in user, decoded from the bearer token.
///
/// Produced by `aud-auth`, consumed by the access rules and `aud-cli`.
/// Contains only data fields. The values are UI hints: the backend remains
/// the authority on every request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionIdentity {
    /// Role id (from the `sid` claim). `None` when the claim is missing or non-numeric.
    pub role_id: Option<i64>,
    /// User id (from the `sub` claim).
    pub user_id: Option<i64>,
    /// Owning company id (from the `typ` claim).
    pub company_id: Option<i64>,
    /// Display name (from the `name` claim).
    pub display_name: Option<String>,
}

impl SessionIdentity {
    /// Typed role. Unknown ids read as `None` and are granted nothing.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self.role_id {
            Some(id) => Role::from_id(id),
            None => None,
        }
    }
}
