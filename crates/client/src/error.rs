//! Error types for the Splunk client.
//!
//! Invariants:
//! - A 4xx response keeps the server's response body so callers see Splunk's reason.
//! - Any other non-2xx response reports the status code only.
//! - Credentials never appear in any variant.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Splunk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure (connection refused, TLS, DNS, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Splunk answered with a 4xx status.
    #[error("Unexpected response from Splunk: {status}\n{body}")]
    ClientStatus {
        status: u16,
        url: String,
        body: String,
        request_id: Option<String>,
    },

    /// Splunk answered with a non-2xx, non-4xx status.
    #[error("Unexpected response from Splunk: {status}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        request_id: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A feed came back without any entry.
    #[error("No entry returned for {0}")]
    EmptyFeed(String),

    /// A JSON pointer did not resolve, or resolved to the wrong type.
    #[error("Lookup of {pointer} failed: {reason}")]
    Lookup {
        pointer: String,
        reason: &'static str,
    },

    /// The named entry has no link with the requested relation.
    #[error("link not found: {rel} for {name}")]
    LinkNotFound { name: String, rel: String },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client was built with incomplete settings.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ClientStatus { status, .. } | Self::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether Splunk reported the object as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub(crate) fn lookup(pointer: &str, reason: &'static str) -> Self {
        Self::Lookup {
            pointer: pointer.to_string(),
            reason,
        }
    }
}
