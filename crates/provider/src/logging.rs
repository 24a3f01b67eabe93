//! Logging initialization.
//!
//! The host owns stdout, so every layer installed here writes to stderr.
//! The filter comes from `RUST_LOG`, falling back to `info`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ProviderError, Result};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Selects the output format; `json` or `text`.
pub const ENV_LOG_FORMAT: &str = "SPLUNK_LOG_FORMAT";

/// Output format of the stderr layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse a format name. Unrecognized names fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    pub fn from_env() -> Self {
        std::env::var(ENV_LOG_FORMAT)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Install the global subscriber, ignoring one that is already set.
pub fn init_logging() {
    // The host may have installed its own subscriber first.
    let _ = try_init_logging();
}

/// Install the global subscriber.
///
/// # Errors
/// Returns [`ProviderError::Logging`] if a global subscriber is already set.
pub fn try_init_logging() -> Result<()> {
    try_init_logging_with(LogFormat::from_env(), DEFAULT_LOG_FILTER)
}

/// Install the global subscriber with an explicit format and fallback filter.
pub fn try_init_logging_with(format: LogFormat, default_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| ProviderError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
    }

    #[test]
    fn test_second_init_fails() {
        init_logging();
        let err = try_init_logging_with(LogFormat::Json, "debug").unwrap_err();
        assert!(matches!(err, ProviderError::Logging(_)));
    }
}
