use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use seo_core::EnhancedResearchData;
use seo_writer::{GapSection, KeywordSet};
use tracing::info;

use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRequest {
    pub keyword: String,
    #[serde(default)]
    pub jina_api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GapsRequest {
    pub keyword: String,
    #[serde(default)]
    pub gaps: Vec<String>,
}

/// Rejection rendered as `{"error": ...}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

fn require_keyword(keyword: &str) -> Result<&str, ApiError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(ApiError::bad_request("keyword must not be empty"));
    }
    Ok(keyword)
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn research(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResearchRequest>,
) -> Result<Json<EnhancedResearchData>, ApiError> {
    let keyword = require_keyword(&request.keyword)?;
    info!("🌐 Research requested for '{}'", keyword);
    let data = state
        .aggregator
        .perform_enhanced_research(keyword, request.jina_api_key.as_deref())
        .await;
    Ok(Json(data))
}

pub async fn keywords(
    State(state): State<Arc<AppState>>,
    Path(keyword): Path<String>,
) -> Result<Json<KeywordSet>, ApiError> {
    let keyword = require_keyword(&keyword)?;
    Ok(Json(state.keywords.generate(keyword)))
}

pub async fn fill_gaps(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GapsRequest>,
) -> Result<Json<Vec<GapSection>>, ApiError> {
    let keyword = require_keyword(&request.keyword)?;
    Ok(Json(state.gap_filler.fill_gaps(keyword, &request.gaps)))
}
