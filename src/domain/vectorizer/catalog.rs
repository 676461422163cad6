//! OpenAI embedding model catalog

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Name of the model used when a class configuration omits `model`
pub const DEFAULT_OPENAI_MODEL: &str = "ada";

/// Supported OpenAI embedding models, in the order they are listed in error messages
const OPENAI_MODELS: &[ModelEntry] = &[
    ModelEntry::legacy("ada", &["002"], Some("002")),
    ModelEntry::legacy("babbage", &[], None),
    ModelEntry::legacy("curie", &[], None),
    ModelEntry::legacy("davinci", &[], None),
    ModelEntry::v3("text-embedding-3-small", &[512, 1536]),
    ModelEntry::v3("text-embedding-3-large", &[256, 1024, 3072]),
];

/// Process-wide OpenAI catalog, built once on first use
pub static OPENAI_CATALOG: Lazy<ModelCatalog> = Lazy::new(|| {
    ModelCatalog::new(OPENAI_MODELS.to_vec(), DEFAULT_OPENAI_MODEL)
        .expect("built-in OpenAI model catalog is consistent")
});

/// Embedding model generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelGeneration {
    /// Fixed output dimensionality, explicit version variants
    Legacy,
    /// Configurable output dimensionality, no version axis
    V3,
}

impl fmt::Display for ModelGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.pad("legacy"),
            Self::V3 => f.pad("v3"),
        }
    }
}

/// Configuration constraints for a single embedding model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    name: &'static str,
    generation: ModelGeneration,
    allowed_dimensions: &'static [u32],
    allowed_versions: &'static [&'static str],
    default_version: Option<&'static str>,
}

impl ModelEntry {
    /// Legacy model with fixed dimensionality
    pub const fn legacy(
        name: &'static str,
        allowed_versions: &'static [&'static str],
        default_version: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            generation: ModelGeneration::Legacy,
            allowed_dimensions: &[],
            allowed_versions,
            default_version,
        }
    }

    /// V3 model with a set of selectable output dimensions
    pub const fn v3(name: &'static str, allowed_dimensions: &'static [u32]) -> Self {
        Self {
            name,
            generation: ModelGeneration::V3,
            allowed_dimensions,
            allowed_versions: &[],
            default_version: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn generation(&self) -> ModelGeneration {
        self.generation
    }

    /// Selectable dimensions in ascending order; empty when not configurable
    pub fn allowed_dimensions(&self) -> &'static [u32] {
        self.allowed_dimensions
    }

    pub fn allowed_versions(&self) -> &'static [&'static str] {
        self.allowed_versions
    }

    pub fn default_version(&self) -> Option<&'static str> {
        self.default_version
    }

    pub fn supports_dimensions(&self) -> bool {
        !self.allowed_dimensions.is_empty()
    }

    pub fn is_versioned(&self) -> bool {
        !self.allowed_versions.is_empty()
    }

    pub fn allows_dimensions(&self, dimensions: i64) -> bool {
        u32::try_from(dimensions)
            .map(|d| self.allowed_dimensions.contains(&d))
            .unwrap_or(false)
    }

    pub fn allows_version(&self, version: &str) -> bool {
        self.allowed_versions.iter().any(|allowed| *allowed == version)
    }
}

/// Catalog construction errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries share a name
    DuplicateModel { name: String },
    /// Default version is not one of the entry's allowed versions
    InvalidDefaultVersion { model: String, version: String },
    /// Allowed dimensions are not strictly ascending
    UnorderedDimensions { model: String },
    /// The default model is not part of the catalog
    UnknownDefaultModel { name: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateModel { name } => write!(f, "duplicate model '{}' in catalog", name),
            Self::InvalidDefaultVersion { model, version } => write!(
                f,
                "default version '{}' of model '{}' is not an allowed version",
                version, model
            ),
            Self::UnorderedDimensions { model } => write!(
                f,
                "allowed dimensions of model '{}' must be strictly ascending",
                model
            ),
            Self::UnknownDefaultModel { name } => {
                write!(f, "default model '{}' is not in the catalog", name)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered, immutable set of supported models
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    entries: Vec<ModelEntry>,
    default_model: &'static str,
}

impl ModelCatalog {
    /// Build a catalog, checking entry invariants
    pub fn new(
        entries: Vec<ModelEntry>,
        default_model: &'static str,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for entry in &entries {
            if !seen.insert(entry.name) {
                return Err(CatalogError::DuplicateModel {
                    name: entry.name.to_string(),
                });
            }

            if let Some(version) = entry.default_version {
                if !entry.allows_version(version) {
                    return Err(CatalogError::InvalidDefaultVersion {
                        model: entry.name.to_string(),
                        version: version.to_string(),
                    });
                }
            }

            if entry.allowed_dimensions.windows(2).any(|w| w[0] >= w[1]) {
                return Err(CatalogError::UnorderedDimensions {
                    model: entry.name.to_string(),
                });
            }
        }

        if !seen.contains(default_model) {
            return Err(CatalogError::UnknownDefaultModel {
                name: default_model.to_string(),
            });
        }

        Ok(Self {
            entries,
            default_model,
        })
    }

    /// Exact, case-sensitive lookup
    pub fn lookup(&self, name: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// All model names in declaration order
    pub fn all_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    /// Names of models with selectable dimensions, in declaration order
    pub fn v3_names(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|entry| entry.generation == ModelGeneration::V3)
            .map(|entry| entry.name)
            .collect()
    }

    pub fn entries(&self) -> &[ModelEntry] {
        &self.entries
    }

    pub fn default_model(&self) -> &'static str {
        self.default_model
    }
}
