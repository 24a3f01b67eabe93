//! The property bag exchanged with the host.
//!
//! Invariants:
//! - `id` is kept apart from the attributes; `to_state` puts it back under `"id"`.
//! - `prior` is only read by `has_change`; handlers write to `attributes`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ProviderError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    id: Option<String>,
    attributes: Map<String, Value>,
    prior: Map<String, Value>,
}

impl ResourceData {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self {
            id: None,
            attributes,
            prior: Map::new(),
        }
    }

    /// Build from a state or plan object, lifting `"id"` out of the attributes.
    pub fn from_state(resource: &'static str, state: Value) -> Result<Self> {
        let Value::Object(mut attributes) = state else {
            return Err(ProviderError::InvalidAttribute {
                resource,
                message: "expected an object".to_string(),
            });
        };
        let id = match attributes.remove("id") {
            Some(Value::String(id)) if !id.is_empty() => Some(id),
            _ => None,
        };
        Ok(Self {
            id,
            attributes,
            prior: Map::new(),
        })
    }

    /// A bag holding only an identifier, as handed over by an import.
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Attach the previously stored attributes, enabling `has_change`.
    pub fn with_prior(mut self, mut prior: Map<String, Value>) -> Self {
        prior.remove("id");
        self.prior = prior;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn require_id(&self, resource: &'static str) -> Result<&str> {
        self.id().ok_or(ProviderError::MissingId { resource })
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|v| !v.is_null())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Whether `key` differs from the prior attributes. `null` and absent are equal.
    pub fn has_change(&self, key: &str) -> bool {
        let prior = self.prior.get(key).filter(|v| !v.is_null());
        self.get(key) != prior
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Deserialize the attributes into a typed struct. `null` attributes are
    /// dropped first so they take `T`'s defaults.
    ///
    /// # Errors
    /// Returns [`ProviderError::InvalidAttribute`] with serde's message when an
    /// attribute is unknown to `T` or has the wrong type.
    pub fn extract<T: DeserializeOwned>(&self, resource: &'static str) -> Result<T> {
        let attributes: Map<String, Value> = self
            .attributes
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::from_value(Value::Object(attributes)).map_err(|e| {
            ProviderError::InvalidAttribute {
                resource,
                message: e.to_string(),
            }
        })
    }

    /// The attributes with the id folded back in.
    pub fn to_state(&self) -> Value {
        let mut state = self.attributes.clone();
        if let Some(id) = &self.id {
            state.insert("id".to_string(), Value::String(id.clone()));
        }
        Value::Object(state)
    }
}
