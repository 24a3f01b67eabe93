//! Metrics collection for REST call performance.
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a recorder in the host process)
//!
//! # Invariants
//! - All metrics use the label names `endpoint`, `method`, `status`, `error_category`.
//! - Endpoint labels are collection paths, never object names, to bound cardinality.
//! - Zero-cost when no metrics recorder is installed.

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "splunk_provider_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "splunk_provider_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "splunk_provider_errors_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection, TLS or body-read failures.
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// Any other non-2xx status.
    HttpOther,
    /// Body did not decode, or a lookup failed.
    Decode,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::HttpOther => "http_other",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::HttpError(_) => ErrorCategory::Transport,
            ClientError::ClientStatus { .. } => ErrorCategory::Http4xx,
            ClientError::UnexpectedStatus { .. } => ErrorCategory::HttpOther,
            ClientError::InvalidResponse(_)
            | ClientError::EmptyFeed(_)
            | ClientError::Lookup { .. } => ErrorCategory::Decode,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for Splunk REST calls.
///
/// A thin wrapper around the `metrics` macros so every call site uses the
/// same metric names and labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of a request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }
}
