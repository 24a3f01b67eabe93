//! Provider configuration types.
//!
//! Responsibilities:
//! - Define the validated `ProviderConfig` handed to the client crate.
//! - Define `ProviderBlock`, the raw declared provider block as the host sends it.
//!
//! Does NOT handle:
//! - Merging declared values with the environment (see `loader`).
//! - Building HTTP clients (see the client crate).
//!
//! Invariants:
//! - The password is held in a `SecretString` and never appears in `Debug` output.
//! - `ProviderConfig::url` never carries a trailing slash.

use secrecy::SecretString;
use serde::Deserialize;

use crate::constants::DEFAULT_INSECURE_SKIP_VERIFY;

/// Module for deserializing optional secrets from plain strings.
mod opt_secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Validated connection settings for a Splunk management endpoint.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Management endpoint base URL (e.g. `https://localhost:8089`).
    pub url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: SecretString,
    /// Disable TLS certificate verification.
    pub insecure_skip_verify: bool,
}

impl ProviderConfig {
    /// Creates a configuration from already-validated parts.
    pub fn new(url: String, username: String, password: SecretString) -> Self {
        Self {
            url,
            username,
            password,
            insecure_skip_verify: DEFAULT_INSECURE_SKIP_VERIFY,
        }
    }
}

/// The provider block exactly as declared by the user.
///
/// Every key is optional here; missing keys fall back to the environment
/// when the block is fed through [`crate::ConfigLoader::with_block`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderBlock {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "opt_secret_string::deserialize")]
    pub password: Option<SecretString>,
    #[serde(default)]
    pub insecure_skip_verify: Option<bool>,
}
