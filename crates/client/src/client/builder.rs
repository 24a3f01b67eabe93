//! Client builder for constructing [`SplunkClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required settings (base_url, username, password)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (redirects, TLS verification)
//!
//! # What this module does NOT handle:
//! - Reading settings from the environment (see `splunk_config::ConfigLoader`)
//!
//! # Invariants
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use secrecy::{ExposeSecret, SecretString};
use splunk_config::ProviderConfig;
use splunk_config::constants::DEFAULT_MAX_REDIRECTS;

use crate::client::SplunkClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`SplunkClient`].
#[derive(Default)]
pub struct SplunkClientBuilder {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    skip_verify: bool,
    metrics: Option<MetricsCollector>,
}

impl SplunkClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Management endpoint, e.g. `https://localhost:8089`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against development instances with self-signed certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Record request metrics through `metrics`.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Take every connection setting from a validated [`ProviderConfig`].
    pub fn from_config(mut self, config: &ProviderConfig) -> Self {
        self.base_url = Some(config.url.clone());
        self.username = Some(config.username.clone());
        self.password = Some(config.password.clone());
        self.skip_verify = config.insecure_skip_verify;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`SplunkClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or blank,
    /// [`ClientError::InvalidConfig`] if a credential is missing, and
    /// `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SplunkClient> {
        let base_url = self
            .base_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let username = self
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ClientError::InvalidConfig("username is required".to_string()))?;
        let password = self
            .password
            .filter(|p| !p.expose_secret().is_empty())
            .ok_or_else(|| ClientError::InvalidConfig("password is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "insecure_skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        tracing::info!("Splunk client configured for {}@{}", username, base_url);

        Ok(SplunkClient {
            http,
            base_url,
            username,
            password,
            metrics: self.metrics,
        })
    }
}
