//! HTTP API types

pub mod error;
pub mod json;
pub mod models;
pub mod schema;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use models::{Model as ApiModel, ModelsResponse};
pub use schema::ValidationResponse;
