//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the `SPLUNK_*` fallback variables.
//! - Fill only the loader fields that were not set explicitly.
//!
//! Invariants:
//! - Explicit values win over the environment.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed, except the password, which is kept verbatim.
//! - Invalid boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_INSECURE, ENV_PASSWORD, ENV_URL, ENV_USERNAME};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Like [`env_var_or_none`], but keeps surrounding whitespace. Used for secrets.
pub fn secret_env_var_or_none(key: &str) -> Option<SecretString> {
    std::env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(|s| SecretString::new(s.into()))
}

/// Parse the boolean spellings accepted for `SPLUNK_INSECURE`.
pub(crate) fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment fallbacks to every field the loader does not have yet.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.url().is_none() {
        if let Some(url) = env_var_or_none(ENV_URL) {
            loader.set_url(Some(url));
        }
    }
    if loader.username().is_none() {
        if let Some(username) = env_var_or_none(ENV_USERNAME) {
            loader.set_username(Some(username));
        }
    }
    if !loader.has_password() {
        if let Some(password) = secret_env_var_or_none(ENV_PASSWORD) {
            loader.set_password(Some(password));
        }
    }
    if loader.insecure_skip_verify().is_none() {
        if let Some(raw) = env_var_or_none(ENV_INSECURE) {
            loader.set_insecure_skip_verify(Some(parse_bool(ENV_INSECURE, &raw)?));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        temp_env::with_vars(
            [
                ("SPLUNK_TEST_EMPTY", Some("")),
                ("SPLUNK_TEST_BLANK", Some("   ")),
                ("SPLUNK_TEST_PADDED", Some("  value  ")),
            ],
            || {
                assert_eq!(env_var_or_none("SPLUNK_TEST_EMPTY"), None);
                assert_eq!(env_var_or_none("SPLUNK_TEST_BLANK"), None);
                assert_eq!(
                    env_var_or_none("SPLUNK_TEST_PADDED"),
                    Some("value".to_string())
                );
                assert_eq!(env_var_or_none("SPLUNK_TEST_UNSET_VARIABLE"), None);
            },
        );
    }

    #[test]
    #[serial]
    fn test_secret_env_var_keeps_whitespace() {
        use secrecy::ExposeSecret;

        temp_env::with_vars(
            [
                ("SPLUNK_TEST_SECRET", Some("  pass word ")),
                ("SPLUNK_TEST_BLANK_SECRET", Some("   ")),
            ],
            || {
                let secret = secret_env_var_or_none("SPLUNK_TEST_SECRET").unwrap();
                assert_eq!(secret.expose_secret(), "  pass word ");
                assert!(secret_env_var_or_none("SPLUNK_TEST_BLANK_SECRET").is_none());
            },
        );
    }

    #[test]
    fn test_parse_bool_spellings() {
        assert!(parse_bool(ENV_INSECURE, "true").unwrap());
        assert!(parse_bool(ENV_INSECURE, "TRUE").unwrap());
        assert!(parse_bool(ENV_INSECURE, "1").unwrap());
        assert!(!parse_bool(ENV_INSECURE, "false").unwrap());
        assert!(!parse_bool(ENV_INSECURE, "0").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        let err = parse_bool(ENV_INSECURE, "yes please").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == ENV_INSECURE));
    }
}
