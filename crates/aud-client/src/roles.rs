//! Role catalogue.

use aud_core::entities::RoleRecord;

use crate::{ApiClient, error::ClientError};

impl ApiClient {
    /// List the role catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_roles(&self) -> Result<Vec<RoleRecord>, ClientError> {
        self.get_json("/Roles").await
    }
}
