//! Serde helpers for Splunk's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Decode scalar fields that Splunk returns as strings, numbers, or booleans
//!   depending on the endpoint and version (`"1"`, `1`, `true` for the same flag).
//! - Map `null` and missing values to the field type's zero value.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//!
//! Invariants / assumptions:
//! - Errors are generic parse errors and never echo field contents.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    U64(u64),
    I64(i64),
    F64(f64),
    String(String),
    List(Vec<Loose>),
}

/// Field types that accept Splunk's loosely typed JSON scalars.
pub trait Lenient: Default + Sized {
    #[doc(hidden)]
    fn from_loose(value: LooseValue) -> Result<Self, &'static str>;
}

/// Opaque wrapper so `Loose` stays private to this module.
#[doc(hidden)]
pub struct LooseValue(Loose);

impl Lenient for String {
    fn from_loose(value: LooseValue) -> Result<Self, &'static str> {
        match value.0 {
            Loose::String(s) => Ok(s),
            Loose::Bool(b) => Ok(b.to_string()),
            Loose::U64(n) => Ok(n.to_string()),
            Loose::I64(n) => Ok(n.to_string()),
            Loose::F64(n) => Ok(n.to_string()),
            Loose::List(_) => Err("expected a string, found a list"),
        }
    }
}

impl Lenient for bool {
    fn from_loose(value: LooseValue) -> Result<Self, &'static str> {
        match value.0 {
            Loose::Bool(b) => Ok(b),
            Loose::U64(n) => Ok(n != 0),
            Loose::I64(n) => Ok(n != 0),
            Loose::F64(n) => Ok(n != 0.0),
            Loose::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" | "f" | "no" => Ok(false),
                "1" | "true" | "t" | "yes" => Ok(true),
                _ => Err("expected a boolean"),
            },
            Loose::List(_) => Err("expected a boolean, found a list"),
        }
    }
}

impl Lenient for i64 {
    fn from_loose(value: LooseValue) -> Result<Self, &'static str> {
        match value.0 {
            Loose::I64(n) => Ok(n),
            Loose::U64(n) => i64::try_from(n).map_err(|_| "integer out of range"),
            Loose::F64(n) if n.fract() == 0.0 => Ok(n as i64),
            Loose::F64(_) => Err("expected an integer"),
            Loose::Bool(b) => Ok(i64::from(b)),
            Loose::String(s) if s.trim().is_empty() => Ok(0),
            Loose::String(s) => s.trim().parse().map_err(|_| "expected an integer"),
            Loose::List(_) => Err("expected an integer, found a list"),
        }
    }
}

impl Lenient for f64 {
    fn from_loose(value: LooseValue) -> Result<Self, &'static str> {
        match value.0 {
            Loose::F64(n) => Ok(n),
            Loose::U64(n) => Ok(n as f64),
            Loose::I64(n) => Ok(n as f64),
            Loose::Bool(_) => Err("expected a number"),
            Loose::String(s) if s.trim().is_empty() => Ok(0.0),
            Loose::String(s) => s.trim().parse().map_err(|_| "expected a number"),
            Loose::List(_) => Err("expected a number, found a list"),
        }
    }
}

impl Lenient for Vec<String> {
    /// A bare scalar counts as a one-element list; an empty string as no list.
    fn from_loose(value: LooseValue) -> Result<Self, &'static str> {
        match value.0 {
            Loose::List(items) => items
                .into_iter()
                .map(|item| match item {
                    Loose::List(_) => Err("nested lists are not supported"),
                    other => String::from_loose(LooseValue(other)),
                })
                .collect(),
            Loose::String(s) if s.is_empty() => Ok(Vec::new()),
            other => String::from_loose(LooseValue(other)).map(|s| vec![s]),
        }
    }
}

/// Deserialize any [`Lenient`] field, mapping `null` to the zero value.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Lenient,
{
    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(T::default()),
        Some(value) => T::from_loose(LooseValue(value)).map_err(D::Error::custom),
    }
}

/// Deserialize a struct field, mapping `null` to `Default::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
