use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// File metadata for a finding's follow-up evidence or annex.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Attachment {
    #[serde(rename = "idArchivo")]
    pub id: i64,
    /// Server-relative path the file is downloaded from.
    #[serde(rename = "rutaArchivo")]
    pub path: String,
    #[serde(rename = "nombreArchivo")]
    pub file_name: String,
    /// MIME type reported at upload.
    #[serde(rename = "tipoArchivo", default)]
    pub content_type: String,
}
