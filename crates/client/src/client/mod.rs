//! Splunk REST client and its transport.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `acl`: ACL updates
//! - `saved_searches`: Saved search CRUD
//! - `users`: User CRUD
//! - `roles`: Role CRUD
//!
//! # What this module does NOT handle:
//! - Status classification (delegated to [`crate::endpoints::request`])
//! - Form encoding (delegated to [`crate::form`])
//!
//! # Invariants
//! - Every request carries basic auth and `output_mode=json`.
//! - Paths are joined onto the base URL; absolute URLs are used as given.
//! - Requests are sent exactly once.

pub mod builder;

mod acl;
mod roles;
mod saved_searches;
mod users;

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};

use crate::endpoints::endpoint_label;
use crate::endpoints::request::send_request;
use crate::error::{ClientError, Result};
use crate::form::FormParams;
use crate::metrics::MetricsCollector;

/// Splunk REST client authenticating every call with basic auth.
///
/// ```rust,ignore
/// use splunk_client::SplunkClient;
///
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .username("admin".to_string())
///     .password(SecretString::new("changeme".to_string().into()))
///     .build()?;
/// let search = client.get_saved_search("errors").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) username: String,
    pub(crate) password: SecretString,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// GET `path` and return the response body.
    pub async fn get(&self, path: &str) -> Result<Vec<u8>> {
        self.execute(Method::GET, path, None).await
    }

    /// POST `form` to `path` and return the response body.
    pub async fn post(&self, path: &str, form: &FormParams) -> Result<Vec<u8>> {
        self.execute(Method::POST, path, Some(form)).await
    }

    /// DELETE `path` and return the response body.
    pub async fn delete(&self, path: &str) -> Result<Vec<u8>> {
        self.execute(Method::DELETE, path, None).await
    }

    /// Absolute URL for a path or link.
    pub fn url_for(&self, path: &str) -> Result<String> {
        if path.starts_with("https://") || path.starts_with("http://") {
            return Ok(path.to_string());
        }
        if !path.starts_with('/') {
            return Err(ClientError::InvalidUrl(format!(
                "path must start with '/': {path}"
            )));
        }
        Ok(format!("{}{}", self.base_url, path))
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        form: Option<&FormParams>,
    ) -> Result<Vec<u8>> {
        let url = self.url_for(path)?;
        let label = endpoint_label(path);
        let method_label = method.as_str().to_string();

        tracing::debug!(method = %method, %url, "Sending Splunk request");

        let mut builder = self
            .http
            .request(method, &url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .query(&[("output_mode", "json")]);
        if let Some(form) = form {
            builder = builder.form(form);
        }

        let response = send_request(builder, label, &method_label, self.metrics.as_ref()).await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
