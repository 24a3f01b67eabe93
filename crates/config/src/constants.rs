//! Centralized constants for the Splunk provider workspace.
//!
//! Environment variable names and defaults live here so the config and
//! provider crates agree on them.

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment fallback for the `url` provider attribute.
pub const ENV_URL: &str = "SPLUNK_URL";

/// Environment fallback for the `username` provider attribute.
pub const ENV_USERNAME: &str = "SPLUNK_USERNAME";

/// Environment fallback for the `password` provider attribute.
pub const ENV_PASSWORD: &str = "SPLUNK_PASSWORD";

/// Environment fallback for the `insecure_skip_verify` provider attribute.
pub const ENV_INSECURE: &str = "SPLUNK_INSECURE";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Connection Defaults
// =============================================================================

/// TLS certificate verification is on unless explicitly disabled.
pub const DEFAULT_INSECURE_SKIP_VERIFY: bool = false;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
