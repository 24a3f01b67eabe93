//! Error types for the provider boundary.
//!
//! Invariants:
//! - Attribute faults are raised before any request reaches Splunk.
//! - Client and configuration faults pass through unchanged.

use splunk_client::ClientError;
use splunk_config::ConfigError;
use thiserror::Error;

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[derive(Error, Debug)]
pub enum ProviderError {
    /// A resource operation ran before `configure`.
    #[error("provider is not configured")]
    NotConfigured,

    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("{resource}: missing required attribute `{attribute}`")]
    MissingAttribute {
        resource: &'static str,
        attribute: String,
    },

    #[error("{resource}: unknown attribute `{attribute}`")]
    UnknownAttribute {
        resource: &'static str,
        attribute: String,
    },

    /// An attribute has the wrong shape or type.
    #[error("{resource}: invalid attributes: {message}")]
    InvalidAttribute {
        resource: &'static str,
        message: String,
    },

    /// Read, update and delete need the identifier set by create or import.
    #[error("{resource}: resource has no id")]
    MissingId { resource: &'static str },

    /// A force-new attribute changed; the host must destroy and recreate.
    #[error("{resource}: changing `{attribute}` requires replacement")]
    RequiresReplacement {
        resource: &'static str,
        attribute: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl ProviderError {
    /// Whether Splunk reported the object as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::Client(e) if e.is_not_found())
    }
}
