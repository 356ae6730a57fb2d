use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{PlanStatus, RiskRating};

/// One scheduled activity of an audit, assigned to an auditor.
///
/// `status` and `rating` hold the raw wire strings; [`AuditPlan::status`] and
/// [`AuditPlan::rating`] give the typed view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditPlan {
    #[serde(rename = "idPlanAuditoria", default, skip_serializing_if = "crate::wire::is_unassigned")]
    pub id: i64,
    #[serde(rename = "id_Auditoria")]
    pub audit_id: i64,
    #[serde(rename = "idProceso")]
    pub process_id: i64,
    #[serde(rename = "idActividad")]
    pub activity_id: i64,
    #[serde(rename = "idAuditor")]
    pub auditor_id: i64,
    #[serde(rename = "fechaInicio", default, with = "crate::wire::opt_date")]
    #[schemars(with = "Option<String>")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "fechaFin", default, with = "crate::wire::opt_date")]
    #[schemars(with = "Option<String>")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "estado", default)]
    pub status: String,
    #[serde(rename = "semaforo", default)]
    pub rating: String,
    /// Report wording drafted.
    #[serde(rename = "redaccion", default)]
    pub drafted: bool,
    #[serde(rename = "revisado", default)]
    pub reviewed: bool,
    #[serde(rename = "comentarios", default)]
    pub comments: String,
    /// Soft-delete flag. Inactive plans are hidden from listings.
    #[serde(rename = "estatus", default = "crate::wire::active")]
    pub active: bool,
}

impl AuditPlan {
    #[must_use]
    pub fn status(&self) -> Option<PlanStatus> {
        PlanStatus::parse(&self.status)
    }

    #[must_use]
    pub fn rating(&self) -> Option<RiskRating> {
        RiskRating::parse(&self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_views_over_wire_strings() {
        let plan: AuditPlan = serde_json::from_str(
            r#"{
                "idPlanAuditoria": 4,
                "id_Auditoria": 1,
                "idProceso": 2,
                "idActividad": 3,
                "idAuditor": 9,
                "fechaInicio": "2024-01-10T00:00:00",
                "fechaFin": null,
                "estado": "en proceso",
                "semaforo": "ncm",
                "redaccion": true,
                "revisado": false,
                "comentarios": "",
                "estatus": true
            }"#,
        )
        .unwrap();
        assert_eq!(plan.status(), Some(PlanStatus::InProgress));
        assert_eq!(plan.rating(), Some(RiskRating::Ncm));
        assert_eq!(plan.start_date, NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(plan.end_date, None);
    }
}
