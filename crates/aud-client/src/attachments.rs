//! Finding attachments: follow-up files and annexes.
//!
//! Both kinds live under `/hallazgos/{id}/<segment>` where the segment is
//! `archivos` (follow-up) or `anexos` (annex). Uploads are multipart with a
//! single `archivo` part. Downloads follow the server-relative `rutaArchivo`
//! of each attachment.

use aud_core::{entities::Attachment, enums::AttachmentKind};
use bytes::Bytes;
use reqwest::{
    Method,
    multipart::{Form, Part},
};

use crate::{ApiClient, error::ClientError, http::check_response};

const DEFAULT_MIME: &str = "application/octet-stream";

fn collection_path(finding_id: i64, kind: AttachmentKind) -> String {
    format!("/hallazgos/{finding_id}/{}", kind.path_segment())
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_attachments(
        &self,
        finding_id: i64,
        kind: AttachmentKind,
    ) -> Result<Vec<Attachment>, ClientError> {
        self.get_json(&collection_path(finding_id, kind)).await
    }

    /// Upload one file.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] for an empty file or malformed
    /// content type, or [`ClientError`] if the backend rejects the upload.
    pub async fn upload_attachment(
        &self,
        finding_id: i64,
        kind: AttachmentKind,
        file_name: &str,
        content_type: Option<&str>,
        data: Vec<u8>,
    ) -> Result<Attachment, ClientError> {
        if data.is_empty() {
            return Err(ClientError::InvalidInput(format!("'{file_name}' is empty")));
        }
        let size = data.len();
        let part = Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(content_type.unwrap_or(DEFAULT_MIME))
            .map_err(|e| ClientError::InvalidInput(format!("content type: {e}")))?;
        tracing::debug!(finding = finding_id, kind = kind.as_str(), file_name, size, "uploading attachment");
        self.send_form(
            Method::POST,
            &collection_path(finding_id, kind),
            Form::new().part("archivo", part),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend refuses the deletion.
    pub async fn delete_attachment(
        &self,
        finding_id: i64,
        kind: AttachmentKind,
        attachment_id: i64,
    ) -> Result<(), ClientError> {
        self.delete(&format!(
            "{}/{attachment_id}",
            collection_path(finding_id, kind)
        ))
        .await
    }

    /// URL an attachment is served from. `rutaArchivo` is resolved against
    /// the server origin unless it is already absolute.
    #[must_use]
    pub fn attachment_url(&self, attachment: &Attachment) -> String {
        let path = attachment.path.trim();
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.origin(), path.trim_start_matches('/'))
    }

    /// Fetch the bytes of an attachment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the file cannot be fetched.
    pub async fn download_attachment(&self, attachment: &Attachment) -> Result<Bytes, ClientError> {
        let url = self.attachment_url(attachment);
        let resp = check_response(self.request(Method::GET, &url).send().await?).await?;
        Ok(resp.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(path: &str) -> Attachment {
        Attachment {
            id: 1,
            path: path.into(),
            file_name: "evidencia.pdf".into(),
            content_type: "application/pdf".into(),
        }
    }

    #[test]
    fn collection_paths_per_kind() {
        assert_eq!(collection_path(7, AttachmentKind::FollowUp), "/hallazgos/7/archivos");
        assert_eq!(collection_path(7, AttachmentKind::Annex), "/hallazgos/7/anexos");
    }

    #[test]
    fn relative_paths_resolve_against_origin() {
        let api = ApiClient::with_http(reqwest::Client::new(), "http://localhost:5000/api");
        assert_eq!(
            api.attachment_url(&attachment("/uploads/hallazgos/7/evidencia.pdf")),
            "http://localhost:5000/uploads/hallazgos/7/evidencia.pdf"
        );
        assert_eq!(
            api.attachment_url(&attachment("uploads/a.pdf")),
            "http://localhost:5000/uploads/a.pdf"
        );
        assert_eq!(
            api.attachment_url(&attachment("https://cdn.example.com/a.pdf")),
            "https://cdn.example.com/a.pdf"
        );
    }

    #[tokio::test]
    async fn empty_upload_is_rejected_locally() {
        let api = ApiClient::with_http(reqwest::Client::new(), "http://127.0.0.1:9/api");
        let err = api
            .upload_attachment(7, AttachmentKind::Annex, "vacio.txt", None, Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }
}
