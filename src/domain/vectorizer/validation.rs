//! Vectorizer settings validation

use std::fmt;

use super::catalog::ModelCatalog;
use super::class::ClassProperties;
use super::settings::{ClassSettings, ModuleConfig};

/// Reasons a class's vectorizer configuration is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassSettingsError {
    /// Model name is not in the catalog
    UnknownModel {
        model: String,
        available: Vec<&'static str>,
    },
    /// Dimensions configured for a model with fixed dimensionality
    DimensionsNotSupported {
        model: String,
        v3_models: Vec<&'static str>,
    },
    /// Dimensions not among the model's selectable values
    InvalidDimensions {
        model: String,
        requested: i64,
        available: Vec<u32>,
    },
    /// Version not among the model's versions
    UnsupportedVersion { model: String, version: String },
    /// A setting holds a value of the wrong JSON type
    InvalidSettingType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    /// No text property to embed and the class name is excluded
    NoVectorizableProperty { class: String },
}

impl ClassSettingsError {
    /// Stable machine-readable kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownModel { .. } => "unknown_model",
            Self::DimensionsNotSupported { .. } => "dimensions_not_supported",
            Self::InvalidDimensions { .. } => "invalid_dimensions",
            Self::UnsupportedVersion { .. } => "unsupported_version",
            Self::InvalidSettingType { .. } => "invalid_setting_type",
            Self::NoVectorizableProperty { .. } => "no_vectorizable_property",
        }
    }

    /// Configuration key the user has to change
    pub fn param(&self) -> &str {
        match self {
            Self::UnknownModel { .. } => "model",
            Self::DimensionsNotSupported { .. } | Self::InvalidDimensions { .. } => "dimensions",
            Self::UnsupportedVersion { .. } => "modelVersion",
            Self::InvalidSettingType { key, .. } => key,
            Self::NoVectorizableProperty { .. } => "properties",
        }
    }
}

fn format_list<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for ClassSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownModel { available, .. } => write!(
                f,
                "wrong OpenAI model name, available model names are: [{}]",
                format_list(available)
            ),
            Self::DimensionsNotSupported { v3_models, .. } => write!(
                f,
                "dimensions setting can only be used with V3 embedding models: [{}]",
                format_list(v3_models)
            ),
            Self::InvalidDimensions {
                model, available, ..
            } => write!(
                f,
                "wrong dimensions setting for {} model, available dimensions are: [{}]",
                model,
                format_list(available)
            ),
            Self::UnsupportedVersion { version, .. } => {
                write!(f, "unsupported version {}", version)
            }
            Self::InvalidSettingType {
                key,
                expected,
                found,
            } => write!(
                f,
                "wrong {} setting type, expected {} but got {}",
                key, expected, found
            ),
            Self::NoVectorizableProperty { class } => write!(
                f,
                "invalid properties: didn't find a single property which is of type string or text in class {}, and the class name is excluded from vectorization",
                class
            ),
        }
    }
}

impl std::error::Error for ClassSettingsError {}

/// Validate a class's raw vectorizer configuration against the catalog
pub fn validate_class_settings(
    class: &dyn ClassProperties,
    config: &ModuleConfig,
    catalog: &ModelCatalog,
) -> Result<(), ClassSettingsError> {
    ClassSettings::new(config, catalog).validate(class)
}
