use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An audited client company.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Company {
    #[serde(rename = "id_Empresas", default, skip_serializing_if = "crate::wire::is_unassigned")]
    pub id: i64,
    #[serde(rename = "nombreEmpresa")]
    pub name: String,
    /// Company logo as a base64 data string.
    #[serde(rename = "imagenBase64", default, skip_serializing_if = "Option::is_none")]
    pub logo_base64: Option<String>,
}
