pub mod ai;
pub mod auth;
pub mod cart;
pub mod menu;

use super::error::ApiError;
use axum::{http::Uri, Json};
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "YumBlock API is running",
    }))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Route not found: {}", uri.path()))
}
