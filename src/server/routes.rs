//! API route handlers.

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::error::ApiError;
use super::AppState;
use crate::result::ExtractResult;
use crate::summarize::summarize as summarize_text;

#[derive(Debug, Default, Deserialize)]
pub struct FetchQuery {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AutopilotRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AutopilotResponse {
    pub meta: ExtractResult,
    pub summary: Vec<String>,
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /api/fetch?url=...`
pub async fn fetch(
    State(state): State<AppState>,
    Query(query): Query<FetchQuery>,
) -> Result<Json<ExtractResult>, ApiError> {
    let url = query.url.unwrap_or_default();
    if url.trim().is_empty() {
        return Err(ApiError::BadRequest("missing url".to_string()));
    }

    let result = state
        .fetcher
        .fetch_and_extract_with_options(&url, state.config.fetch_deadline, &state.options)
        .await?;

    Ok(Json(result))
}

/// `POST /api/summarize` with the raw text as body.
pub async fn summarize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SummaryResponse>, ApiError> {
    let text = String::from_utf8_lossy(&body);
    if text.trim().is_empty() {
        return Err(ApiError::BadRequest("empty body".to_string()));
    }

    let summary = summarize_text(&text, state.config.summary_sentences);
    debug!(input_len = text.len(), sentences = summary.len(), "summarize request");

    Ok(Json(SummaryResponse { summary }))
}

/// `POST /api/autopilot` with `{"url": "..."}`: fetch, extract, summarize.
///
/// A body that is not valid JSON is treated like one without a url.
pub async fn autopilot(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AutopilotResponse>, ApiError> {
    let request: AutopilotRequest = serde_json::from_slice(&body).unwrap_or_default();
    if request.url.trim().is_empty() {
        return Err(ApiError::BadRequest("missing url".to_string()));
    }

    let meta = state
        .fetcher
        .fetch_and_extract_with_options(
            &request.url,
            state.config.autopilot_deadline,
            &state.options,
        )
        .await?;
    let summary = summarize_text(&meta.summary_input(), state.config.summary_sentences);

    Ok(Json(AutopilotResponse { meta, summary }))
}
