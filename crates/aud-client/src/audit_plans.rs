//! Audit plan endpoints. Delete deactivates the plan.

use aud_core::entities::AuditPlan;
use reqwest::Method;

use crate::{ApiClient, error::ClientError};

impl ApiClient {
    /// List every plan, deactivated ones included. Role scoping happens in
    /// [`aud_core::access::scope_plans`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_plans(&self) -> Result<Vec<AuditPlan>, ClientError> {
        self.get_json("/PlanAuditoria").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 when the plan does not exist.
    pub async fn get_plan(&self, id: i64) -> Result<AuditPlan, ClientError> {
        self.get_json(&format!("/PlanAuditoria/{id}")).await
    }

    /// Create a plan. New plans are always sent as active.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the plan.
    pub async fn create_plan(&self, plan: &AuditPlan) -> Result<AuditPlan, ClientError> {
        let mut plan = plan.clone();
        plan.active = true;
        self.send_json(Method::POST, "/PlanAuditoria", &plan).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the update.
    pub async fn update_plan(&self, id: i64, plan: &AuditPlan) -> Result<(), ClientError> {
        let mut plan = plan.clone();
        plan.id = id;
        self.send_json_unit(Method::PUT, &format!("/PlanAuditoria/{id}"), &plan)
            .await
    }

    /// Deactivate a plan. It keeps its row with `estatus = false`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend refuses the deactivation.
    pub async fn deactivate_plan(&self, id: i64) -> Result<(), ClientError> {
        tracing::info!(plan = id, "deactivating audit plan");
        self.delete(&format!("/PlanAuditoria/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plan_list_fixture() {
        let json = r#"[
            {"idPlanAuditoria":1,"id_Auditoria":10,"idProceso":100,"idActividad":5,
             "idAuditor":3,"fechaInicio":"2024-02-01","fechaFin":"2024-02-15",
             "estado":"Pendiente","semaforo":"NCM","redaccion":true,"revisado":false,
             "comentarios":"","estatus":true},
            {"idPlanAuditoria":2,"id_Auditoria":10,"idProceso":100,"idActividad":6,
             "idAuditor":3,"estado":"Listo","estatus":false}
        ]"#;
        let plans: Vec<AuditPlan> = serde_json::from_str(json).unwrap();
        assert_eq!(plans.len(), 2);
        assert!(plans[0].drafted);
        assert!(!plans[1].active);
        assert!(plans[1].start_date.is_none());
    }
}
