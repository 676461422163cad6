//! Class validation response types

use serde::Serialize;

use crate::domain::ResolvedVectorizerSettings;

/// Response for an accepted class definition
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub vectorizer: ResolvedVectorizerSettings,
}

impl ValidationResponse {
    pub fn accepted(vectorizer: ResolvedVectorizerSettings) -> Self {
        Self {
            valid: true,
            vectorizer,
        }
    }
}
