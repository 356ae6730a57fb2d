use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An auditable activity belonging to a process.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Activity {
    #[serde(rename = "idActividad", default, skip_serializing_if = "crate::wire::is_unassigned")]
    pub id: i64,
    #[serde(rename = "nombreActividad")]
    pub name: String,
    #[serde(rename = "idProceso")]
    pub process_id: i64,
    /// Evaluation criterion the auditor checks against.
    #[serde(rename = "criterio", default)]
    pub criterion: String,
}
