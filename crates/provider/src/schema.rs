//! Schema descriptions for the provider block and each resource type.
//!
//! A host renders these to its own schema format. Validation here only
//! covers presence: attribute types are checked when the bag is extracted
//! into a typed struct.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ProviderError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    List(Box<AttributeType>),
    /// Free-form object whose keys are checked by the resource.
    Map,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub required: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub force_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attribute {
    fn new(attr_type: AttributeType, required: bool) -> Self {
        Self {
            attr_type,
            required,
            computed: false,
            sensitive: false,
            force_new: false,
            description: None,
        }
    }

    pub fn required_string() -> Self {
        Self::new(AttributeType::String, true)
    }

    pub fn optional_string() -> Self {
        Self::new(AttributeType::String, false)
    }

    pub fn optional_bool() -> Self {
        Self::new(AttributeType::Bool, false)
    }

    pub fn optional_string_list() -> Self {
        Self::new(AttributeType::List(Box::new(AttributeType::String)), false)
    }

    pub fn optional_map() -> Self {
        Self::new(AttributeType::Map, false)
    }

    /// Also filled in from the server on read.
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Never logged or echoed back by the host.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// A change cannot be applied in place.
    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Attributes of one resource type (or of the provider block).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub version: u64,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// An empty schema at version 0.
    pub fn v0() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Names of the attributes whose change forces replacement.
    pub fn force_new_attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|(_, a)| a.force_new)
            .map(|(name, _)| name.as_str())
    }

    /// Check that every key is declared and every required attribute is set.
    ///
    /// `null` counts as unset.
    pub fn validate(&self, resource: &'static str, attributes: &Map<String, Value>) -> Result<()> {
        if let Some(key) = attributes.keys().find(|k| !self.attributes.contains_key(*k)) {
            return Err(ProviderError::UnknownAttribute {
                resource,
                attribute: key.clone(),
            });
        }

        for (name, attribute) in &self.attributes {
            let present = attributes.get(name).is_some_and(|v| !v.is_null());
            if attribute.required && !present {
                return Err(ProviderError::MissingAttribute {
                    resource,
                    attribute: name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Every schema the provider exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProviderSchema {
    pub provider: Schema,
    pub resources: BTreeMap<String, Schema>,
}

impl ProviderSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider_config(mut self, schema: Schema) -> Self {
        self.provider = schema;
        self
    }

    pub fn with_resource(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.resources.insert(name.into(), schema);
        self
    }

    pub fn resource(&self, name: &str) -> Option<&Schema> {
        self.resources.get(name)
    }
}
