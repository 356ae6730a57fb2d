use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A business process under audit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Process {
    #[serde(rename = "idProceso", default, skip_serializing_if = "crate::wire::is_unassigned")]
    pub id: i64,
    #[serde(rename = "nombreProceso")]
    pub name: String,
}
