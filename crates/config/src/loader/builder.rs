//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges declared values and
//!   environment fallbacks.
//! - Build and validate the final `ProviderConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods and the declared block take precedence over environment variables,
//!   regardless of call order.
//! - Empty declared strings count as unset, the same as empty environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_INSECURE_SKIP_VERIFY, ENV_DOTENV_DISABLED};
use crate::types::{ProviderBlock, ProviderConfig};

/// Configuration loader that builds a [`ProviderConfig`] from declared values
/// and environment variables.
#[derive(Default)]
pub struct ConfigLoader {
    url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    insecure_skip_verify: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply the declared provider block.
    ///
    /// Keys that are absent or blank in the block are left for the environment.
    pub fn with_block(mut self, block: ProviderBlock) -> Self {
        if let Some(url) = non_blank(block.url) {
            self.url = Some(url);
        }
        if let Some(username) = non_blank(block.username) {
            self.username = Some(username);
        }
        if let Some(password) = block.password
            && !password.expose_secret().trim().is_empty()
        {
            self.password = Some(password);
        }
        if let Some(skip) = block.insecure_skip_verify {
            self.insecure_skip_verify = Some(skip);
        }
        self
    }

    /// Fill every unset value from the `SPLUNK_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the management endpoint URL.
    pub fn with_url(mut self, url: String) -> Self {
        self.url = Some(url);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_insecure_skip_verify(mut self, skip: bool) -> Self {
        self.insecure_skip_verify = Some(skip);
        self
    }

    pub(crate) fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub(crate) fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub(crate) fn has_password(&self) -> bool {
        self.password.is_some()
    }

    pub(crate) fn insecure_skip_verify(&self) -> Option<bool> {
        self.insecure_skip_verify
    }

    pub(crate) fn set_url(&mut self, url: Option<String>) {
        self.url = url;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_insecure_skip_verify(&mut self, skip: Option<bool>) {
        self.insecure_skip_verify = skip;
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<ProviderConfig, ConfigError> {
        let url = self
            .url
            .as_deref()
            .map(validate_and_normalize_url)
            .transpose()?
            .ok_or(ConfigError::MissingUrl)?;

        let username = self
            .username
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingUsername)?;

        let password = self
            .password
            .filter(|p| !p.expose_secret().is_empty())
            .ok_or(ConfigError::MissingPassword)?;

        Ok(ProviderConfig {
            url,
            username,
            password,
            insecure_skip_verify: self
                .insecure_skip_verify
                .unwrap_or(DEFAULT_INSECURE_SKIP_VERIFY),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn validate_and_normalize_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://localhost:8089): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "url".into(),
            message: format!(
                "scheme must be http or https (e.g. https://localhost:8089), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "url".into(),
            message: "host is required (e.g. https://localhost:8089)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
