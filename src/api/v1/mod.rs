//! v1 API endpoints

pub mod models;
pub mod schema;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/models", get(models::list_models))
        .route("/models/{model_name}", get(models::get_model))
        .route("/schema/validate", post(schema::validate_class))
}
