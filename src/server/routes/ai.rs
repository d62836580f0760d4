use crate::model::ExtractResponse;
use crate::server::error::ApiError;
use crate::server::AppStateArc;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use log::info;
use serde::Deserialize;

pub fn routes() -> Router<AppStateArc> {
    Router::new().route("/extract", post(extract))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractRequest {
    user_input: Option<String>,
}

async fn extract(
    State(state): State<AppStateArc>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let Json(req) = payload?;

    let input = req.user_input.unwrap_or_default();
    if input.trim().is_empty() {
        return Err(ApiError::BadRequest("Please provide text input".to_string()));
    }

    let draft = state.extractor.extract(&input).await?;
    info!(
        "Extracted '{}' ({})",
        draft.title,
        if draft.is_ai_powered() { "ai" } else { "fallback" }
    );

    Ok(Json(ExtractResponse::from(draft)))
}
