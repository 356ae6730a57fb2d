use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Role;

/// A backend user account.
///
/// `password` is write-only: the backend never returns it, and it is omitted
/// from request bodies when empty so updates leave the stored hash untouched.
#[derive(Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "idUsuario", default, skip_serializing_if = "crate::wire::is_unassigned")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nombreUsuario")]
    pub username: String,
    #[serde(rename = "correo", default)]
    pub email: String,
    #[serde(rename = "contrasenia", default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(rename = "idRol")]
    pub role_id: i64,
    /// Soft-delete flag. Deactivated users stay in `/Usuarios/all`.
    #[serde(rename = "estatus", default = "crate::wire::active")]
    pub active: bool,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    /// Failed login attempts counted by the backend.
    #[serde(rename = "intentos", default)]
    pub failed_attempts: i32,
    #[serde(rename = "fotoPerfil", default, skip_serializing_if = "Option::is_none")]
    pub photo_base64: Option<String>,
    #[serde(rename = "idEmpresa", default)]
    pub company_id: i64,
}

impl User {
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        Role::from_id(self.role_id)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("role_id", &self.role_id)
            .field("active", &self.active)
            .field("phone", &self.phone)
            .field("failed_attempts", &self.failed_attempts)
            .field("company_id", &self.company_id)
            .finish_non_exhaustive()
    }
}
