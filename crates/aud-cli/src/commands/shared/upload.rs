use std::path::Path;

use anyhow::Context;
use base64::Engine as _;

/// Read an image file for a base64 form field (company logo, profile photo).
pub fn read_base64(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// MIME type from a file extension, for attachment uploads.
#[must_use]
pub fn guess_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::guess_content_type;

    #[test]
    fn guesses_common_types() {
        assert_eq!(guess_content_type(Path::new("evidencia.PDF")), "application/pdf");
        assert_eq!(guess_content_type(Path::new("foto.jpeg")), "image/jpeg");
        assert_eq!(guess_content_type(Path::new("sin_extension")), "application/octet-stream");
    }
}
