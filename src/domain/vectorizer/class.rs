//! Class definitions as submitted by schema clients

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
use mockall::automock;

/// Data types that carry text the vectorizer can embed
const TEXT_DATA_TYPES: &[&str] = &["text", "string", "text[]", "string[]"];

/// Read access to the parts of a class the vectorizer needs
#[cfg_attr(test, automock)]
pub trait ClassProperties {
    /// Name of the class
    fn class_name(&self) -> &str;

    /// Whether at least one property holds text
    fn has_text_property(&self) -> bool;
}

/// A single class property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub data_type: Vec<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: vec![data_type.into()],
        }
    }

    /// Primary data type decides whether the property is text
    pub fn is_text(&self) -> bool {
        self.data_type
            .first()
            .is_some_and(|dt| TEXT_DATA_TYPES.iter().any(|text| *text == dt))
    }
}

/// Class definition with per-module configuration blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    #[serde(rename = "class")]
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub module_config: Map<String, Value>,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            module_config: Map::new(),
        }
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_module_config(mut self, module: impl Into<String>, config: Value) -> Self {
        self.module_config.insert(module.into(), config);
        self
    }

    /// Raw configuration block for a module, if present
    pub fn config_for(&self, module: &str) -> Option<&Value> {
        self.module_config.get(module)
    }
}

impl ClassProperties for ClassDefinition {
    fn class_name(&self) -> &str {
        &self.name
    }

    fn has_text_property(&self) -> bool {
        self.properties.iter().any(Property::is_text)
    }
}
