//! Keyword analysis route.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use hunter_core::{AnalysisMode, SeoAnalysisResult};
use serde::Deserialize;
use tracing::info;

use super::{bad_request, json_body, orchestrator_error, present, ApiError};
use crate::state::AppState;

pub const FIELDS_REQUIRED: &str = "Input and mode are required.";
pub const API_NOT_CONFIGURED: &str =
    "Naver API is not configured on the server. Please set the required environment variables.";
pub const ANALYSIS_FAILED: &str = "Failed to get SEO analysis from Gemini API.";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<SeoAnalysisResult>, ApiError> {
    let req = json_body(payload)?;

    let (Some(input), Some(mode)) = (present(req.input), present(req.mode)) else {
        return Err(bad_request(FIELDS_REQUIRED));
    };

    let mode: AnalysisMode = mode.parse().map_err(|e: hunter_core::HunterError| {
        bad_request(e.to_string())
    })?;

    if mode.requires_external_api() && !state.external_api_configured {
        return Err(bad_request(API_NOT_CONFIGURED));
    }

    info!(%mode, input_len = input.len(), "Analysis requested");

    let result = state
        .analyzer
        .analyze(&input, mode)
        .await
        .map_err(|e| orchestrator_error(e, ANALYSIS_FAILED))?;

    Ok(Json(result))
}
