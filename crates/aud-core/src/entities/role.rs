use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// A row of the backend `/Roles` catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoleRecord {
    #[serde(rename = "idRol")]
    pub id: i64,
    #[serde(rename = "nombreRol")]
    pub name: String,
}

impl RoleRecord {
    /// Typed role, `None` for ids the client does not know.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        Role::from_id(self.id)
    }
}
