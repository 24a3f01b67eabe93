//! Path lookups into untyped JSON responses.
//!
//! Pointers use RFC 6901 syntax (`/entry/0/content/email`).
//!
//! Invariants:
//! - A missing key, an out-of-range index, or a value of the wrong type is a
//!   [`ClientError::Lookup`], never a panic.

use serde_json::Value;

use crate::error::{ClientError, Result};

/// Value at `pointer`.
pub fn lookup<'a>(doc: &'a Value, pointer: &str) -> Result<&'a Value> {
    doc.pointer(pointer)
        .ok_or_else(|| ClientError::lookup(pointer, "no value at path"))
}

/// String at `pointer`.
pub fn lookup_str(doc: &Value, pointer: &str) -> Result<String> {
    lookup(doc, pointer)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ClientError::lookup(pointer, "expected a string"))
}

/// List of scalars at `pointer`, each rendered as a string.
///
/// A bare string is accepted as a one-element list.
pub fn lookup_string_list(doc: &Value, pointer: &str) -> Result<Vec<String>> {
    match lookup(doc, pointer)? {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                scalar_to_string(item)
                    .ok_or_else(|| ClientError::lookup(pointer, "expected a list of scalars"))
            })
            .collect(),
        Value::String(s) => Ok(vec![s.clone()]),
        _ => Err(ClientError::lookup(pointer, "expected a list")),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "entry": [{
                "content": {
                    "email": "ops@example.com",
                    "roles": ["admin", "power"],
                    "srchIndexesAllowed": "main",
                    "mixed": ["a", 1, true],
                    "nested": [{ "x": 1 }],
                    "count": 3
                }
            }]
        })
    }

    #[test]
    fn test_lookup_str() {
        assert_eq!(
            lookup_str(&doc(), "/entry/0/content/email").unwrap(),
            "ops@example.com"
        );
    }

    #[test]
    fn test_lookup_missing_key_is_fault() {
        let err = lookup_str(&doc(), "/entry/0/content/realname").unwrap_err();
        assert!(matches!(err, ClientError::Lookup { ref pointer, .. } if pointer == "/entry/0/content/realname"));
    }

    #[test]
    fn test_lookup_out_of_range_index_is_fault() {
        assert!(lookup(&doc(), "/entry/1/content").is_err());
    }

    #[test]
    fn test_lookup_wrong_type_is_fault() {
        assert!(lookup_str(&doc(), "/entry/0/content/count").is_err());
        assert!(lookup_string_list(&doc(), "/entry/0/content/count").is_err());
        assert!(lookup_string_list(&doc(), "/entry/0/content/nested").is_err());
    }

    #[test]
    fn test_lookup_string_list() {
        assert_eq!(
            lookup_string_list(&doc(), "/entry/0/content/roles").unwrap(),
            vec!["admin", "power"]
        );
        assert_eq!(
            lookup_string_list(&doc(), "/entry/0/content/mixed").unwrap(),
            vec!["a", "1", "true"]
        );
    }

    #[test]
    fn test_lookup_scalar_as_single_element_list() {
        assert_eq!(
            lookup_string_list(&doc(), "/entry/0/content/srchIndexesAllowed").unwrap(),
            vec!["main"]
        );
    }
}
