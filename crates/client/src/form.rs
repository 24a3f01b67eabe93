//! Form encoding for Splunk's `application/x-www-form-urlencoded` endpoints.
//!
//! Responsibilities:
//! - Hold an ordered multimap of form parameters ([`FormParams`]).
//! - Encode a record into form parameters from a static table of field tags
//!   ([`FieldTag`]), one entry per wire key.
//! - Provide the crate-internal `form_model!` macro that declares a model struct,
//!   its serde renames, and its field table from a single list.
//!
//! Does NOT handle:
//! - Resource-specific quirks such as comma-joined ACL permissions (see `models::acl`).
//!
//! Invariants:
//! - Field order on the wire follows table order.
//! - List values become one repeated key per element.
//! - `Debug` output lists keys only, so secrets in values never reach logs.

use serde::Serialize;
use std::fmt;

/// Ordered form parameters. Keys may repeat.
#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormParams(Vec<(String, String)>);

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one key/value pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Append one pair per value, all under the same key.
    pub fn push_all<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.push(key, value);
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Collapse every value of `key` into one `sep`-joined value at the
    /// position of the first occurrence. No-op when the key is absent.
    pub fn join_values(&mut self, key: &str, sep: &str) {
        let Some(first) = self.0.iter().position(|(k, _)| k == key) else {
            return;
        };
        let joined = self.get_all(key).join(sep);
        self.0[first].1 = joined;
        let mut index = 0;
        self.0.retain(|(k, _)| {
            let keep = k != key || index == first;
            index += 1;
            keep
        });
    }

    /// Append every pair of `other`.
    pub fn extend(&mut self, other: FormParams) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pairs as `(key, value)` tuples, in order.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

impl fmt::Debug for FormParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|(k, _)| k))
            .finish()
    }
}

/// A single field value, before conversion to wire strings.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    List(Vec<String>),
}

impl FormValue {
    /// Whether this is the zero value of its type.
    pub fn is_empty(&self) -> bool {
        match self {
            FormValue::Text(s) => s.is_empty(),
            FormValue::Bool(b) => !b,
            FormValue::Int(n) => *n == 0,
            FormValue::Float(n) => *n == 0.0,
            FormValue::List(items) => items.is_empty(),
        }
    }

    fn into_strings(self) -> Vec<String> {
        match self {
            FormValue::Text(s) => vec![s],
            FormValue::Bool(b) => vec![b.to_string()],
            FormValue::Int(n) => vec![n.to_string()],
            FormValue::Float(n) => vec![n.to_string()],
            FormValue::List(items) => items,
        }
    }
}

impl From<&String> for FormValue {
    fn from(value: &String) -> Self {
        FormValue::Text(value.clone())
    }
}

impl From<&bool> for FormValue {
    fn from(value: &bool) -> Self {
        FormValue::Bool(*value)
    }
}

impl From<&i64> for FormValue {
    fn from(value: &i64) -> Self {
        FormValue::Int(*value)
    }
}

impl From<&f64> for FormValue {
    fn from(value: &f64) -> Self {
        FormValue::Float(*value)
    }
}

impl From<&Vec<String>> for FormValue {
    fn from(value: &Vec<String>) -> Self {
        FormValue::List(value.clone())
    }
}

impl From<FormValue> for serde_json::Value {
    fn from(value: FormValue) -> Self {
        match value {
            FormValue::Text(s) => serde_json::Value::String(s),
            FormValue::Bool(b) => serde_json::Value::Bool(b),
            FormValue::Int(n) => serde_json::Value::from(n),
            FormValue::Float(n) => serde_json::Value::from(n),
            FormValue::List(items) => serde_json::Value::from(items),
        }
    }
}

/// When a field is written to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encode {
    /// Always written, zero values included.
    Always,
    /// Skipped when the value is its type's zero value.
    OmitEmpty,
    /// Never written; the field is server-computed or handled by hand.
    Never,
}

/// Wire name, omission rule and accessor for one field of `T`.
pub struct FieldTag<T> {
    pub name: &'static str,
    pub encode: Encode,
    pub get: fn(&T) -> FormValue,
}

/// Records with a static field table.
pub trait FormEncode: Sized + 'static {
    fn form_fields() -> &'static [FieldTag<Self>];

    fn to_form(&self) -> FormParams {
        encode(self, Self::form_fields())
    }

    /// Whether `key` is a wire name of this record.
    fn has_form_field(key: &str) -> bool {
        Self::form_fields().iter().any(|tag| tag.name == key)
    }

    /// Whether `key` is a wire name that is ever sent. Server-computed fields are not.
    fn is_writable_form_field(key: &str) -> bool {
        Self::form_fields()
            .iter()
            .any(|tag| tag.name == key && tag.encode != Encode::Never)
    }
}

/// Encode `value` using `fields`, in table order.
pub fn encode<T>(value: &T, fields: &[FieldTag<T>]) -> FormParams {
    let mut form = FormParams::new();
    for tag in fields {
        if tag.encode == Encode::Never {
            continue;
        }
        let field = (tag.get)(value);
        if tag.encode == Encode::OmitEmpty && field.is_empty() {
            continue;
        }
        form.push_all(tag.name, field.into_strings());
    }
    form
}

/// Declare a model struct whose fields double as form fields.
///
/// Each line is `field: Type => "wire.name", Rule;` where `Rule` is an
/// [`Encode`] variant. The struct gets a serde rename and a lenient decoder
/// per field, plus a [`FormEncode`] impl with the fields in declaration order.
macro_rules! form_model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $field:ident : $ty:ty => $key:literal, $rule:ident;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $key, default, deserialize_with = "crate::serde_helpers::lenient")]
                pub $field: $ty,
            )*
        }

        impl $crate::form::FormEncode for $name {
            fn form_fields() -> &'static [$crate::form::FieldTag<Self>] {
                static FIELDS: &[$crate::form::FieldTag<$name>] = &[
                    $(
                        $crate::form::FieldTag {
                            name: $key,
                            encode: $crate::form::Encode::$rule,
                            get: |v: &$name| $crate::form::FormValue::from(&v.$field),
                        },
                    )*
                ];
                FIELDS
            }
        }
    };
}

pub(crate) use form_model;
