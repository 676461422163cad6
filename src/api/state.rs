//! Application state for shared services

use std::sync::Arc;

use crate::domain::{
    ClassDefinition, ClassSettingsError, DomainError, ModelEntry, ResolvedVectorizerSettings,
};
use crate::infrastructure::services::VectorizerService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub vectorizer_service: Arc<dyn VectorizerServiceTrait>,
}

impl AppState {
    pub fn new(vectorizer_service: Arc<dyn VectorizerServiceTrait>) -> Self {
        Self { vectorizer_service }
    }
}

/// Trait for vectorizer validation operations
pub trait VectorizerServiceTrait: Send + Sync {
    fn validate_class(
        &self,
        class: &ClassDefinition,
    ) -> Result<ResolvedVectorizerSettings, ClassSettingsError>;
    fn list_models(&self) -> Vec<ModelEntry>;
    fn get_model(&self, name: &str) -> Result<ModelEntry, DomainError>;
    fn default_model(&self) -> &'static str;
}

impl VectorizerServiceTrait for VectorizerService {
    fn validate_class(
        &self,
        class: &ClassDefinition,
    ) -> Result<ResolvedVectorizerSettings, ClassSettingsError> {
        VectorizerService::validate_class(self, class)
    }

    fn list_models(&self) -> Vec<ModelEntry> {
        VectorizerService::list_models(self).to_vec()
    }

    fn get_model(&self, name: &str) -> Result<ModelEntry, DomainError> {
        VectorizerService::get_model(self, name).cloned()
    }

    fn default_model(&self) -> &'static str {
        VectorizerService::default_model(self)
    }
}
