//! OpenAI vectorizer settings validator
//!
//! Checks a class's vectorizer configuration (model, model version,
//! output dimensions) against the catalog of supported OpenAI embedding
//! models before the class is accepted:
//! - Static model catalog with per-model dimension and version constraints
//! - Ordered validation rules with exact, user-facing error messages
//! - HTTP API and CLI front ends

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    validate_class_settings, ClassDefinition, ClassSettings, ClassSettingsError, ModuleConfig,
};
pub use infrastructure::services::VectorizerService;
