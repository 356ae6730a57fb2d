//! # aud-client
//!
//! Typed HTTP client for the audit management REST API.
//!
//! One `impl ApiClient` block per resource:
//! - companies (`/Empresas`, multipart bodies)
//! - users (`/Usuarios`, multipart bodies, soft delete)
//! - roles (`/Roles`, read-only)
//! - audits (`/Auditoria`)
//! - audit plans (`/PlanAuditoria`, soft delete)
//! - processes and activities (`/Procesos`, `/Actividades`)
//! - findings (`/hallazgos`, `/Hallazgos/vista`)
//! - finding attachments (`/hallazgos/{id}/archivos`, `/hallazgos/{id}/anexos`)
//!
//! Every request carries `Authorization: Bearer <token>` once a token is set.

pub mod activities;
pub mod attachments;
pub mod audit_plans;
pub mod audits;
pub mod companies;
pub mod findings;
pub mod processes;
pub mod roles;
pub mod users;

mod error;
mod http;

pub use error::ClientError;

use std::time::Duration;

use aud_config::ApiConfig;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

use crate::http::{check_response, decode};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_http(http, config.normalized_base_url()))
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach the bearer token sent with every subsequent request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying HTTP client, shared with the login flow.
    #[must_use]
    pub const fn http(&self) -> &reqwest::Client {
        &self.http
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Scheme, host and port of the base URL. Attachment paths are
    /// server-relative, not API-relative.
    pub(crate) fn origin(&self) -> &str {
        let after_scheme = self.base_url.find("://").map_or(0, |i| i + 3);
        match self.base_url[after_scheme..].find('/') {
            Some(slash) => &self.base_url[..after_scheme + slash],
            None => &self.base_url,
        }
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = check_response(self.request(Method::GET, &self.url(path)).send().await?).await?;
        decode(resp).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = check_response(
            self.request(method, &self.url(path))
                .json(body)
                .send()
                .await?,
        )
        .await?;
        decode(resp).await
    }

    /// Send a JSON body and discard whatever the backend answers with.
    pub(crate) async fn send_json_unit<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        check_response(
            self.request(method, &self.url(path))
                .json(body)
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    pub(crate) async fn send_form<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ClientError> {
        let resp = check_response(
            self.request(method, &self.url(path))
                .multipart(form)
                .send()
                .await?,
        )
        .await?;
        decode(resp).await
    }

    pub(crate) async fn send_form_unit(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<(), ClientError> {
        check_response(
            self.request(method, &self.url(path))
                .multipart(form)
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        check_response(self.request(Method::DELETE, &self.url(path)).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::with_http(reqwest::Client::new(), base)
    }

    #[test]
    fn url_joins_without_double_slash() {
        let api = client("http://localhost:5000/api/");
        assert_eq!(api.base_url(), "http://localhost:5000/api");
        assert_eq!(api.url("/Empresas"), "http://localhost:5000/api/Empresas");
        assert_eq!(api.url("Roles"), "http://localhost:5000/api/Roles");
    }

    #[test]
    fn origin_strips_api_path() {
        assert_eq!(client("http://localhost:5000/api").origin(), "http://localhost:5000");
        assert_eq!(client("https://audit.example.com").origin(), "https://audit.example.com");
        assert_eq!(
            client("https://audit.example.com/v2/api").origin(),
            "https://audit.example.com"
        );
    }

    #[test]
    fn token_is_optional() {
        let api = client("http://localhost/api");
        assert!(!api.has_token());
        assert!(api.with_token("abc").has_token());
    }

    #[test]
    fn from_config_uses_normalized_url() {
        let config = ApiConfig {
            base_url: "http://localhost:5000/api//".into(),
            timeout_secs: 5,
            user_agent: "aud-test".into(),
        };
        let api = ApiClient::from_config(&config).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000/api");
    }
}
