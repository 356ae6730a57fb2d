use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An audit engagement against one client company.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Audit {
    #[serde(rename = "id_Auditoria", default, skip_serializing_if = "crate::wire::is_unassigned")]
    pub id: i64,
    #[serde(rename = "nombreAuditoria")]
    pub name: String,
    #[serde(rename = "id_Empresa")]
    pub company_id: i64,
    #[serde(rename = "fechaInicio", default, with = "crate::wire::opt_date")]
    #[schemars(with = "Option<String>")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "fechaFinalizacion", default, with = "crate::wire::opt_date")]
    #[schemars(with = "Option<String>")]
    pub end_date: Option<NaiveDate>,
    /// Display name of the lead auditor.
    #[serde(rename = "auditorResponsable", default)]
    pub lead_auditor: String,
    #[serde(rename = "nota", default)]
    pub note: String,
    #[serde(rename = "estado", default)]
    pub status: String,
}
