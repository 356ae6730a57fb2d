//! Activity catalogue endpoints.

use aud_core::entities::Activity;
use reqwest::Method;

use crate::{ApiClient, error::ClientError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_activities(&self) -> Result<Vec<Activity>, ClientError> {
        self.get_json("/Actividades").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 when the activity does not exist.
    pub async fn get_activity(&self, id: i64) -> Result<Activity, ClientError> {
        self.get_json(&format!("/Actividades/{id}")).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the activity.
    pub async fn create_activity(&self, activity: &Activity) -> Result<Activity, ClientError> {
        self.send_json(Method::POST, "/Actividades", activity).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the update.
    pub async fn update_activity(&self, id: i64, activity: &Activity) -> Result<(), ClientError> {
        let mut activity = activity.clone();
        activity.id = id;
        self.send_json_unit(Method::PUT, &format!("/Actividades/{id}"), &activity)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend refuses the deletion.
    pub async fn delete_activity(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/Actividades/{id}")).await
    }
}
