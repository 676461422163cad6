//! Domain layer - Core business logic and entities

pub mod error;
pub mod vectorizer;

pub use error::DomainError;
pub use vectorizer::{
    validate_class_settings, ClassDefinition, ClassProperties, ClassSettings, ClassSettingsError,
    ModelCatalog, ModelEntry, ModelGeneration, ModuleConfig, Property, ResolvedVectorizerSettings,
    OPENAI_CATALOG,
};
