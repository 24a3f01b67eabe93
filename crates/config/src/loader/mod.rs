//! Configuration loader for declared values and environment variables.
//!
//! Responsibilities:
//! - Merge the declared provider block with `SPLUNK_*` environment fallbacks.
//! - Provide a builder-pattern `ConfigLoader`.
//! - Enforce the `DOTENV_DISABLED` gate before loading `.env` files.
//!
//! Does NOT handle:
//! - Constructing the HTTP client (see the client crate).
//!
//! Invariants / Assumptions:
//! - Explicit values win; the environment only supplies defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
