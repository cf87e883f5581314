//! Blog post generation route.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use hunter_core::BlogPostResult;
use serde::Deserialize;
use tracing::info;

use super::{bad_request, json_body, orchestrator_error, present, ApiError};
use crate::state::AppState;

pub const FIELDS_REQUIRED: &str = "Keyword, style, and length are required.";
pub const POST_FAILED: &str = "Failed to generate blog post from Gemini API.";

#[derive(Debug, Deserialize)]
pub struct GeneratePostRequest {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
}

pub async fn generate_post(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePostRequest>, JsonRejection>,
) -> Result<Json<BlogPostResult>, ApiError> {
    let req = json_body(payload)?;

    let (Some(keyword), Some(style), Some(length)) =
        (present(req.keyword), present(req.style), present(req.length))
    else {
        return Err(bad_request(FIELDS_REQUIRED));
    };

    info!(%style, %length, "Post generation requested");

    let post = state
        .writer
        .generate_post(&keyword, &style, &length)
        .await
        .map_err(|e| orchestrator_error(e, POST_FAILED))?;

    Ok(Json(post))
}
