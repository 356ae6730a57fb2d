//! User endpoints. Create and update use multipart bodies; delete deactivates.

use aud_core::entities::User;
use reqwest::{Method, multipart::Form};

use crate::{ApiClient, error::ClientError};

/// Text fields of the multipart user body, in wire names.
fn user_fields(user: &User) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("nombre", user.name.clone()),
        ("nombreUsuario", user.username.clone()),
        ("correo", user.email.clone()),
        ("idRol", user.role_id.to_string()),
        ("estatus", user.active.to_string()),
        ("telefono", user.phone.clone()),
        ("intentos", user.failed_attempts.to_string()),
        ("idEmpresa", user.company_id.to_string()),
    ];
    if !user.password.is_empty() {
        fields.push(("contrasenia", user.password.clone()));
    }
    if let Some(photo) = &user.photo_base64 {
        fields.push(("fotoPerfil", photo.clone()));
    }
    fields
}

fn user_form(fields: Vec<(&'static str, String)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
}

impl ApiClient {
    /// List active users.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.get_json("/Usuarios").await
    }

    /// List every user, deactivated ones included.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_all_users(&self) -> Result<Vec<User>, ClientError> {
        self.get_json("/Usuarios/all").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 when the user does not exist.
    pub async fn get_user(&self, id: i64) -> Result<User, ClientError> {
        self.get_json(&format!("/Usuarios/{id}")).await
    }

    /// Create a user. New users are always sent as active.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] when no password is given, or
    /// [`ClientError`] if the backend rejects the user.
    pub async fn create_user(&self, user: &User) -> Result<User, ClientError> {
        if user.password.is_empty() {
            return Err(ClientError::InvalidInput(
                "a password is required for new users".to_string(),
            ));
        }
        let mut user = user.clone();
        user.active = true;
        tracing::debug!(username = %user.username, role = user.role_id, "creating user");
        self.send_form(Method::POST, "/Usuarios", user_form(user_fields(&user)))
            .await
    }

    /// Update a user. An empty password leaves the stored one unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the update.
    pub async fn update_user(&self, id: i64, user: &User) -> Result<(), ClientError> {
        let mut fields = user_fields(user);
        fields.push(("idUsuario", id.to_string()));
        self.send_form_unit(Method::PUT, &format!("/Usuarios/{id}"), user_form(fields))
            .await
    }

    /// Deactivate a user. The row stays in [`Self::list_all_users`] with
    /// `estatus = false`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend refuses the deactivation.
    pub async fn deactivate_user(&self, id: i64) -> Result<(), ClientError> {
        tracing::info!(user = id, "deactivating user");
        self.delete(&format!("/Usuarios/{id}")).await
    }
}
