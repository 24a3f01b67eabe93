//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `env_lock()` for additional synchronization.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every `SPLUNK_*` fallback cleared, for tests that must not see the host environment.
pub const CLEARED_ENV: [(&str, Option<&str>); 4] = [
    ("SPLUNK_URL", None),
    ("SPLUNK_USERNAME", None),
    ("SPLUNK_PASSWORD", None),
    ("SPLUNK_INSECURE", None),
];
