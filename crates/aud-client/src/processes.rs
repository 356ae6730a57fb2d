//! Process catalogue endpoints.

use aud_core::entities::Process;
use reqwest::Method;

use crate::{ApiClient, error::ClientError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_processes(&self) -> Result<Vec<Process>, ClientError> {
        self.get_json("/Procesos").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 when the process does not exist.
    pub async fn get_process(&self, id: i64) -> Result<Process, ClientError> {
        self.get_json(&format!("/Procesos/{id}")).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the process.
    pub async fn create_process(&self, process: &Process) -> Result<Process, ClientError> {
        self.send_json(Method::POST, "/Procesos", process).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the update.
    pub async fn update_process(&self, id: i64, process: &Process) -> Result<(), ClientError> {
        let process = Process {
            id,
            name: process.name.clone(),
        };
        self.send_json_unit(Method::PUT, &format!("/Procesos/{id}"), &process)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend refuses the deletion.
    pub async fn delete_process(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/Procesos/{id}")).await
    }
}
