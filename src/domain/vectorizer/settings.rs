//! Typed access to a class's vectorizer configuration

use serde::Serialize;
use serde_json::{Map, Value};

use super::catalog::{ModelCatalog, ModelEntry, ModelGeneration};
use super::class::ClassProperties;
use super::validation::ClassSettingsError;

pub const MODEL_KEY: &str = "model";
pub const MODEL_VERSION_KEY: &str = "modelVersion";
pub const DIMENSIONS_KEY: &str = "dimensions";
pub const VECTORIZE_CLASS_NAME_KEY: &str = "vectorizeClassName";

const DEFAULT_VECTORIZE_CLASS_NAME: bool = true;

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_mismatch(key: &str, expected: &'static str, value: &Value) -> ClassSettingsError {
    ClassSettingsError::InvalidSettingType {
        key: key.to_string(),
        expected,
        found: json_type_name(value),
    }
}

/// Raw module configuration with fallible typed getters.
///
/// Absent keys and explicit `null` values read as `None`. A value of the
/// wrong JSON type is an error, never silently coerced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleConfig {
    values: Map<String, Value>,
}

impl ModuleConfig {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Build from a module's configuration block; `null` is an empty block
    pub fn from_value(value: Value) -> Result<Self, ClassSettingsError> {
        match value {
            Value::Object(values) => Ok(Self::new(values)),
            Value::Null => Ok(Self::default()),
            other => Err(type_mismatch("moduleConfig", "object", &other)),
        }
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|value| !value.is_null())
    }

    pub fn get_str(&self, key: &str) -> Result<Option<&str>, ClassSettingsError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(type_mismatch(key, "string", other)),
        }
    }

    /// Integers, and floats without a fractional part.
    ///
    /// Values beyond the `i64` range saturate; they are still integers.
    pub fn get_int(&self, key: &str) -> Result<Option<i64>, ClassSettingsError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_u64().map(|_| i64::MAX))
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .map(Some)
                .ok_or_else(|| ClassSettingsError::InvalidSettingType {
                    key: key.to_string(),
                    expected: "integer",
                    found: "number",
                }),
            Some(other) => Err(type_mismatch(key, "integer", other)),
        }
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, ClassSettingsError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(type_mismatch(key, "boolean", other)),
        }
    }
}

/// Vectorizer settings a class resolves to after validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVectorizerSettings {
    pub class: String,
    pub model: String,
    pub generation: ModelGeneration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    pub vectorize_class_name: bool,
}

/// Per-call view of a class configuration resolved against a catalog
#[derive(Debug, Clone, Copy)]
pub struct ClassSettings<'a> {
    config: &'a ModuleConfig,
    catalog: &'a ModelCatalog,
}

impl<'a> ClassSettings<'a> {
    pub fn new(config: &'a ModuleConfig, catalog: &'a ModelCatalog) -> Self {
        Self { config, catalog }
    }

    /// Configured model name, or the catalog default
    pub fn model_name(&self) -> Result<&'a str, ClassSettingsError> {
        Ok(self
            .config
            .get_str(MODEL_KEY)?
            .unwrap_or(self.catalog.default_model()))
    }

    pub fn model(&self) -> Result<&'a ModelEntry, ClassSettingsError> {
        let name = self.model_name()?;

        self.catalog
            .lookup(name)
            .ok_or_else(|| ClassSettingsError::UnknownModel {
                model: name.to_string(),
                available: self.catalog.all_names(),
            })
    }

    pub fn dimensions(&self) -> Result<Option<i64>, ClassSettingsError> {
        self.config.get_int(DIMENSIONS_KEY)
    }

    /// Requested version, or the model default; `None` for unversioned models
    pub fn model_version(&self) -> Result<Option<&'a str>, ClassSettingsError> {
        let model = self.model()?;
        if !model.is_versioned() {
            return Ok(None);
        }

        Ok(self
            .config
            .get_str(MODEL_VERSION_KEY)?
            .or(model.default_version()))
    }

    pub fn vectorize_class_name(&self) -> Result<bool, ClassSettingsError> {
        Ok(self
            .config
            .get_bool(VECTORIZE_CLASS_NAME_KEY)?
            .unwrap_or(DEFAULT_VECTORIZE_CLASS_NAME))
    }

    /// Check the configuration; the first violated rule is returned
    pub fn validate(&self, class: &dyn ClassProperties) -> Result<(), ClassSettingsError> {
        let model = self.model()?;

        if let Some(dimensions) = self.dimensions()? {
            if !model.supports_dimensions() {
                return Err(ClassSettingsError::DimensionsNotSupported {
                    model: model.name().to_string(),
                    v3_models: self.catalog.v3_names(),
                });
            }

            if !model.allows_dimensions(dimensions) {
                return Err(ClassSettingsError::InvalidDimensions {
                    model: model.name().to_string(),
                    requested: dimensions,
                    available: model.allowed_dimensions().to_vec(),
                });
            }
        }

        if model.is_versioned() {
            if let Some(version) = self.config.get_str(MODEL_VERSION_KEY)? {
                if !model.allows_version(version) {
                    return Err(ClassSettingsError::UnsupportedVersion {
                        model: model.name().to_string(),
                        version: version.to_string(),
                    });
                }
            }
        }

        if !self.vectorize_class_name()? && !class.has_text_property() {
            return Err(ClassSettingsError::NoVectorizableProperty {
                class: class.class_name().to_string(),
            });
        }

        Ok(())
    }

    /// Validate, then report the effective settings
    pub fn resolve(
        &self,
        class: &dyn ClassProperties,
    ) -> Result<ResolvedVectorizerSettings, ClassSettingsError> {
        self.validate(class)?;
        let model = self.model()?;

        Ok(ResolvedVectorizerSettings {
            class: class.class_name().to_string(),
            model: model.name().to_string(),
            generation: model.generation(),
            dimensions: self.dimensions()?,
            model_version: self.model_version()?.map(str::to_string),
            vectorize_class_name: self.vectorize_class_name()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::vectorizer::catalog::OPENAI_CATALOG;
    use crate::domain::vectorizer::class::{ClassDefinition, Property};

    fn config(value: Value) -> ModuleConfig {
        ModuleConfig::from_value(value).unwrap()
    }

    #[test]
    fn test_get_str() {
        let cfg = config(json!({ "model": "ada", "empty": null, "count": 4 }));

        assert_eq!(cfg.get_str("model").unwrap(), Some("ada"));
        assert_eq!(cfg.get_str("empty").unwrap(), None);
        assert_eq!(cfg.get_str("missing").unwrap(), None);
        assert!(matches!(
            cfg.get_str("count"),
            Err(ClassSettingsError::InvalidSettingType {
                expected: "string",
                found: "number",
                ..
            })
        ));
    }

    #[test]
    fn test_get_int() {
        let cfg = config(json!({
            "int": 512,
            "whole_float": 1024.0,
            "fraction": 512.5,
            "negative": -3,
            "huge": u64::MAX,
            "huge_float": 1e20,
            "text": "512",
            "list": [512]
        }));

        assert_eq!(cfg.get_int("int").unwrap(), Some(512));
        assert_eq!(cfg.get_int("whole_float").unwrap(), Some(1024));
        assert_eq!(cfg.get_int("negative").unwrap(), Some(-3));
        assert_eq!(cfg.get_int("huge").unwrap(), Some(i64::MAX));
        assert_eq!(cfg.get_int("huge_float").unwrap(), Some(i64::MAX));
        assert_eq!(cfg.get_int("missing").unwrap(), None);
        assert!(cfg.get_int("fraction").is_err());
        assert!(cfg.get_int("text").is_err());
        assert_eq!(
            cfg.get_int("list").unwrap_err().to_string(),
            "wrong list setting type, expected integer but got array"
        );
    }

    #[test]
    fn test_get_bool() {
        let cfg = config(json!({ "flag": false, "text": "false" }));

        assert_eq!(cfg.get_bool("flag").unwrap(), Some(false));
        assert!(cfg.get_bool("text").is_err());
    }

    #[test]
    fn test_from_value() {
        assert_eq!(
            ModuleConfig::from_value(Value::Null).unwrap(),
            ModuleConfig::default()
        );
        assert_eq!(
            ModuleConfig::from_value(json!("ada")).unwrap_err().to_string(),
            "wrong moduleConfig setting type, expected object but got string"
        );
    }

    #[test]
    fn test_default_model_and_version() {
        let cfg = ModuleConfig::default();
        let settings = ClassSettings::new(&cfg, &OPENAI_CATALOG);

        assert_eq!(settings.model_name().unwrap(), "ada");
        assert_eq!(settings.model_version().unwrap(), Some("002"));
        assert_eq!(settings.dimensions().unwrap(), None);
        assert!(settings.vectorize_class_name().unwrap());
    }

    #[test]
    fn test_version_not_reported_for_v3() {
        let cfg = config(json!({ "model": "text-embedding-3-small", "modelVersion": "002" }));
        let settings = ClassSettings::new(&cfg, &OPENAI_CATALOG);

        assert_eq!(settings.model_version().unwrap(), None);
    }

    #[test]
    fn test_resolve() {
        let class = ClassDefinition::new("Article").with_property(Property::new("title", "text"));
        let cfg = config(json!({ "model": "text-embedding-3-large", "dimensions": 256 }));

        let resolved = ClassSettings::new(&cfg, &OPENAI_CATALOG)
            .resolve(&class)
            .unwrap();

        assert_eq!(
            resolved,
            ResolvedVectorizerSettings {
                class: "Article".to_string(),
                model: "text-embedding-3-large".to_string(),
                generation: ModelGeneration::V3,
                dimensions: Some(256),
                model_version: None,
                vectorize_class_name: true,
            }
        );
    }

    #[test]
    fn test_resolve_serialization() {
        let class = ClassDefinition::new("Article").with_property(Property::new("title", "text"));
        let cfg = ModuleConfig::default();

        let resolved = ClassSettings::new(&cfg, &OPENAI_CATALOG)
            .resolve(&class)
            .unwrap();
        let json = serde_json::to_value(&resolved).unwrap();

        assert_eq!(
            json,
            json!({
                "class": "Article",
                "model": "ada",
                "generation": "legacy",
                "modelVersion": "002",
                "vectorizeClassName": true
            })
        );
    }
}
