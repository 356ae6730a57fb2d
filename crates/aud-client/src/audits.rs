//! Audit endpoints.

use aud_core::entities::Audit;
use reqwest::Method;

use crate::{ApiClient, error::ClientError};

impl ApiClient {
    /// List audits visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_audits(&self) -> Result<Vec<Audit>, ClientError> {
        self.get_json("/Auditoria").await
    }

    /// List every audit regardless of company.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_all_audits(&self) -> Result<Vec<Audit>, ClientError> {
        self.get_json("/Auditoria/all").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 when the audit does not exist.
    pub async fn get_audit(&self, id: i64) -> Result<Audit, ClientError> {
        self.get_json(&format!("/Auditoria/{id}")).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the audit.
    pub async fn create_audit(&self, audit: &Audit) -> Result<Audit, ClientError> {
        self.send_json(Method::POST, "/Auditoria", audit).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the update.
    pub async fn update_audit(&self, id: i64, audit: &Audit) -> Result<(), ClientError> {
        let mut audit = audit.clone();
        audit.id = id;
        self.send_json_unit(Method::PUT, &format!("/Auditoria/{id}"), &audit)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend refuses the deletion.
    pub async fn delete_audit(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/Auditoria/{id}")).await
    }
}
