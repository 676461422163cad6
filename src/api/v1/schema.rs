//! Class schema validation handler

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ValidationResponse};
use crate::domain::ClassDefinition;

/// POST /v1/schema/validate
pub async fn validate_class(
    State(state): State<AppState>,
    Json(class): Json<ClassDefinition>,
) -> Result<Json<ValidationResponse>, ApiError> {
    debug!(class = %class.name, "Validating class definition");

    let resolved = state.vectorizer_service.validate_class(&class)?;

    Ok(Json(ValidationResponse::accepted(resolved)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::config::VectorizerConfig;
    use crate::infrastructure::services::VectorizerService;

    fn state() -> AppState {
        let service = VectorizerService::from_config(&VectorizerConfig::default()).unwrap();
        AppState::new(Arc::new(service))
    }

    fn class(config: serde_json::Value) -> ClassDefinition {
        serde_json::from_value(json!({
            "class": "test",
            "properties": [{ "name": "test", "dataType": ["text"] }],
            "moduleConfig": { "text2vec-openai": config }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_class() {
        let Json(response) = validate_class(
            State(state()),
            Json(class(json!({ "model": "text-embedding-3-large", "dimensions": 3072 }))),
        )
        .await
        .unwrap();

        assert!(response.valid);
        assert_eq!(response.vectorizer.model, "text-embedding-3-large");
        assert_eq!(response.vectorizer.dimensions, Some(3072));
    }

    #[tokio::test]
    async fn test_rejects_with_exact_message() {
        let err = validate_class(
            State(state()),
            Json(class(json!({ "model": "ada", "dimensions": 512 }))),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.response.error.message,
            "dimensions setting can only be used with V3 embedding models: [text-embedding-3-small text-embedding-3-large]"
        );
        assert_eq!(
            err.response.error.code.as_deref(),
            Some("dimensions_not_supported")
        );
    }

    #[tokio::test]
    async fn test_rejects_unknown_model() {
        let err = validate_class(
            State(state()),
            Json(class(json!({ "model": "unknown-model" }))),
        )
        .await
        .unwrap_err();

        assert_eq!(err.response.error.param.as_deref(), Some("model"));
        assert_eq!(
            err.response.error.message,
            "wrong OpenAI model name, available model names are: [ada babbage curie davinci text-embedding-3-small text-embedding-3-large]"
        );
    }
}
