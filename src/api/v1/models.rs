//! Models endpoint handlers

use axum::extract::{Path, State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiModel, Json, ModelsResponse};

/// GET /v1/models
pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    debug!("Listing catalog models");

    let service = &state.vectorizer_service;
    let models = service
        .list_models()
        .iter()
        .map(ApiModel::from_domain)
        .collect();

    Json(ModelsResponse::new(service.default_model(), models))
}

/// GET /v1/models/{model_name}
pub async fn get_model(
    State(state): State<AppState>,
    Path(model_name): Path<String>,
) -> Result<Json<ApiModel>, ApiError> {
    debug!(model_name = %model_name, "Getting catalog model");

    let model = state.vectorizer_service.get_model(&model_name)?;

    Ok(Json(ApiModel::from_domain(&model)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;

    use super::*;
    use crate::config::VectorizerConfig;
    use crate::infrastructure::services::VectorizerService;

    fn state() -> AppState {
        let service = VectorizerService::from_config(&VectorizerConfig::default()).unwrap();
        AppState::new(Arc::new(service))
    }

    #[tokio::test]
    async fn test_list_models() {
        let Json(response) = list_models(State(state())).await;

        assert_eq!(response.default_model, "ada");
        let ids: Vec<&str> = response.data.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "ada",
                "babbage",
                "curie",
                "davinci",
                "text-embedding-3-small",
                "text-embedding-3-large",
            ]
        );
    }

    #[tokio::test]
    async fn test_get_model() {
        let Json(model) = get_model(State(state()), Path("text-embedding-3-small".to_string()))
            .await
            .unwrap();

        assert_eq!(model.dimensions, vec![512, 1536]);
    }

    #[tokio::test]
    async fn test_get_unknown_model() {
        let err = get_model(State(state()), Path("text-embedding-ada-002".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(
            err.response.error.message,
            "Model 'text-embedding-ada-002' not found"
        );
    }
}
