//! Shared HTTP response helpers for resource modules.
//!
//! Centralizes status-code checks so resource modules stay focused on request
//! construction and response mapping.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`ClientError::Unauthorized`]
/// - **Non-success status** → [`ClientError::Api`] with the backend's
///   `message` field when the body is JSON, the raw body otherwise, and the
///   canonical reason phrase for an empty body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    tracing::debug!(url = %resp.url(), status = status.as_u16(), "backend response");

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string()),
        });
    }
    Ok(resp)
}

/// Pull a readable message out of an error body.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .or_else(|| map.get("title"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .or_else(|| Some(body.to_string())),
        Ok(serde_json::Value::String(text)) => Some(text),
        _ => Some(body.to_string()),
    }
}

/// Decode a JSON body, reporting the expected type on failure.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        ClientError::Decode(format!("{}: {e}", std::any::type_name::<T>()))
    })
}
