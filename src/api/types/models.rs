//! Catalog listing types

use serde::Serialize;

use crate::domain::{ModelEntry, ModelGeneration};

/// A catalog entry as exposed over HTTP
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub object: String,
    pub generation: ModelGeneration,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_version: Option<String>,
}

impl Model {
    /// Create a model from a catalog entry
    pub fn from_domain(entry: &ModelEntry) -> Self {
        Self {
            id: entry.name().to_string(),
            object: "model".to_string(),
            generation: entry.generation(),
            dimensions: entry.allowed_dimensions().to_vec(),
            versions: entry
                .allowed_versions()
                .iter()
                .map(|v| v.to_string())
                .collect(),
            default_version: entry.default_version().map(str::to_string),
        }
    }
}

/// List models response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelsResponse {
    pub object: String,
    pub default_model: String,
    pub data: Vec<Model>,
}

impl ModelsResponse {
    /// Create a new models response
    pub fn new(default_model: impl Into<String>, models: Vec<Model>) -> Self {
        Self {
            object: "list".to_string(),
            default_model: default_model.into(),
            data: models,
        }
    }
}
