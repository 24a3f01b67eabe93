//! Configuration management for the Splunk provider.
//!
//! This crate provides the provider configuration surface (endpoint URL,
//! basic-auth credentials and TLS policy) and a loader that merges declared
//! values with environment variable fallbacks.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ProviderBlock, ProviderConfig};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
