//! Vectorizer domain - OpenAI model catalog and class settings validation

mod catalog;
mod class;
mod settings;
mod validation;

pub use catalog::{
    CatalogError, ModelCatalog, ModelEntry, ModelGeneration, DEFAULT_OPENAI_MODEL, OPENAI_CATALOG,
};
pub use class::{ClassDefinition, ClassProperties, Property};
pub use settings::{
    ClassSettings, ModuleConfig, ResolvedVectorizerSettings, DIMENSIONS_KEY, MODEL_KEY,
    MODEL_VERSION_KEY, VECTORIZE_CLASS_NAME_KEY,
};
pub use validation::{validate_class_settings, ClassSettingsError};
