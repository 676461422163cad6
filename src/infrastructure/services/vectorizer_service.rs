//! Vectorizer service - validates class definitions against the model catalog

use tracing::{debug, info, warn};

use crate::config::VectorizerConfig;
use crate::domain::{
    ClassDefinition, ClassSettings, ClassSettingsError, DomainError, ModelCatalog, ModelEntry,
    ModuleConfig, ResolvedVectorizerSettings, OPENAI_CATALOG,
};

/// Checks class vectorizer settings before a class is accepted
#[derive(Debug)]
pub struct VectorizerService {
    catalog: &'static ModelCatalog,
    module_name: String,
}

impl VectorizerService {
    /// Create a service reading settings from the given `moduleConfig` key
    pub fn new(
        catalog: &'static ModelCatalog,
        module_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let module_name = module_name.into();

        if module_name.trim().is_empty() {
            return Err(DomainError::configuration(
                "vectorizer module name cannot be empty",
            ));
        }

        Ok(Self {
            catalog,
            module_name,
        })
    }

    /// Create a service over the OpenAI catalog
    pub fn from_config(config: &VectorizerConfig) -> Result<Self, DomainError> {
        Self::new(&OPENAI_CATALOG, config.module_name.clone())
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Validate a class definition and return its effective settings
    pub fn validate_class(
        &self,
        class: &ClassDefinition,
    ) -> Result<ResolvedVectorizerSettings, ClassSettingsError> {
        debug!(class = %class.name, module = %self.module_name, "Validating vectorizer settings");

        let result = self.module_config(class).and_then(|config| {
            ClassSettings::new(&config, self.catalog).resolve(class)
        });

        match &result {
            Ok(resolved) => info!(
                class = %resolved.class,
                model = %resolved.model,
                dimensions = ?resolved.dimensions,
                model_version = ?resolved.model_version,
                "Vectorizer settings accepted"
            ),
            Err(e) => warn!(
                class = %class.name,
                code = e.code(),
                param = e.param(),
                "Vectorizer settings rejected: {}",
                e
            ),
        }

        result
    }

    /// A missing module block means every setting takes its default
    fn module_config(&self, class: &ClassDefinition) -> Result<ModuleConfig, ClassSettingsError> {
        match class.config_for(&self.module_name) {
            Some(value) => ModuleConfig::from_value(value.clone()),
            None => Ok(ModuleConfig::default()),
        }
    }

    /// Catalog entries in declaration order
    pub fn list_models(&self) -> &[ModelEntry] {
        self.catalog.entries()
    }

    pub fn get_model(&self, name: &str) -> Result<&ModelEntry, DomainError> {
        self.catalog
            .lookup(name)
            .ok_or_else(|| DomainError::not_found(format!("Model '{}' not found", name)))
    }

    pub fn default_model(&self) -> &'static str {
        self.catalog.default_model()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{ModelGeneration, Property};

    fn service() -> VectorizerService {
        VectorizerService::from_config(&VectorizerConfig::default()).unwrap()
    }

    fn article(config: serde_json::Value) -> ClassDefinition {
        ClassDefinition::new("Article")
            .with_property(Property::new("title", "text"))
            .with_module_config("text2vec-openai", config)
    }

    #[test]
    fn test_empty_module_name_rejected() {
        let result = VectorizerService::new(&OPENAI_CATALOG, "  ");
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_validate_class() {
        let resolved = service()
            .validate_class(&article(json!({ "model": "text-embedding-3-small", "dimensions": 512 })))
            .unwrap();

        assert_eq!(resolved.model, "text-embedding-3-small");
        assert_eq!(resolved.generation, ModelGeneration::V3);
        assert_eq!(resolved.dimensions, Some(512));
    }

    #[test]
    fn test_validate_class_rejects() {
        let err = service()
            .validate_class(&article(json!({ "model": "ada", "modelVersion": "003" })))
            .unwrap_err();

        assert_eq!(err.to_string(), "unsupported version 003");
    }

    #[test]
    fn test_missing_module_block_uses_defaults() {
        let class = ClassDefinition::new("Article").with_property(Property::new("title", "text"));
        let resolved = service().validate_class(&class).unwrap();

        assert_eq!(resolved.model, "ada");
        assert_eq!(resolved.model_version.as_deref(), Some("002"));
    }

    #[test]
    fn test_other_modules_are_ignored() {
        let class = article(json!({ "model": "ada" }))
            .with_module_config("text2vec-cohere", json!({ "model": "embed-multilingual" }));

        assert!(service().validate_class(&class).is_ok());
    }

    #[test]
    fn test_custom_module_name() {
        let service = VectorizerService::new(&OPENAI_CATALOG, "text2vec-azure").unwrap();
        let class = ClassDefinition::new("Article")
            .with_property(Property::new("title", "text"))
            .with_module_config("text2vec-azure", json!({ "model": "unknown-model" }));

        let err = service.validate_class(&class).unwrap_err();
        assert_eq!(err.code(), "unknown_model");
    }

    #[test]
    fn test_non_object_module_block() {
        let err = service().validate_class(&article(json!(["ada"]))).unwrap_err();
        assert_eq!(err.param(), "moduleConfig");
    }

    #[test]
    fn test_get_model() {
        let service = service();

        assert_eq!(service.get_model("curie").unwrap().name(), "curie");
        assert!(matches!(
            service.get_model("gpt-4"),
            Err(DomainError::NotFound { .. })
        ));
        assert_eq!(service.list_models().len(), 6);
        assert_eq!(service.default_model(), "ada");
    }
}
