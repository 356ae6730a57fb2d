//! Finding endpoints and the denormalized finding view.

use aud_core::entities::{Finding, FindingView};
use reqwest::Method;

use crate::{ApiClient, error::ClientError};

impl ApiClient {
    /// List findings joined with audit, process, activity and responsible
    /// names. Rows are not scoped by company; see
    /// [`aud_core::access::scope_findings`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_finding_views(&self) -> Result<Vec<FindingView>, ClientError> {
        self.get_json("/Hallazgos/vista").await
    }

    /// List raw finding records.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_findings(&self) -> Result<Vec<Finding>, ClientError> {
        self.get_json("/hallazgos").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 when the finding does not exist.
    pub async fn get_finding(&self, id: i64) -> Result<Finding, ClientError> {
        self.get_json(&format!("/hallazgos/{id}")).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the finding.
    pub async fn create_finding(&self, finding: &Finding) -> Result<Finding, ClientError> {
        self.send_json(Method::POST, "/hallazgos", finding).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the update.
    pub async fn update_finding(&self, id: i64, finding: &Finding) -> Result<(), ClientError> {
        let mut finding = finding.clone();
        finding.id = id;
        self.send_json_unit(Method::PUT, &format!("/hallazgos/{id}"), &finding)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend refuses the deletion.
    pub async fn delete_finding(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/hallazgos/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_view_fixture() {
        let json = r#"[{
            "iD_Hallazgo": 40,
            "iD_Auditoria": 10,
            "nombre_Auditoria": "Auditoria Q1",
            "nombre_Proceso": "Compras",
            "nombre_Actividad": "Conciliacion",
            "montoImpacto": 12500.5,
            "semaforo": "NCA",
            "cumplido": false,
            "idEmpresa": 2
        }]"#;
        let rows: Vec<FindingView> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].id, 40);
        assert_eq!(rows[0].company_id, 2);
        assert_eq!(rows[0].audit_name, "Auditoria Q1");
        assert!(rows[0].commitment_date.is_none());
    }
}
