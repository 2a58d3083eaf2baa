use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::llm::{SummaryRequest, DEFAULT_SELECTOR};
use crate::server::AppState;

/// Body returned for every failed invocation, whatever the cause.
pub const INVOCATION_FAILED: &str = "Model invocation failed.";

/// Query parameters of the summary route, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryParams {
    pub keyword: String,
    pub model: String,
}

impl SummaryParams {
    /// First occurrence of each known key wins; anything else is ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_else(|| DEFAULT_SELECTOR.to_string())
        };

        Self {
            keyword: first("keyword"),
            model: first("model"),
        }
    }

    pub fn as_request(&self) -> SummaryRequest<'_> {
        SummaryRequest {
            keyword: &self.keyword,
            model: &self.model,
        }
    }
}

/// JSON body of the summary route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryResponse {
    Summary { summary: String },
    Error { error: String },
}

impl SummaryResponse {
    pub fn failed() -> Self {
        Self::Error {
            error: INVOCATION_FAILED.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Summary { .. } => StatusCode::OK,
            Self::Error { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

pub async fn generate_summary(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> SummaryResponse {
    let params = SummaryParams::from_pairs(&pairs);

    match state.summarizer.summarize(params.as_request()).await {
        Ok(summary) => SummaryResponse::Summary { summary },
        Err(e) => {
            tracing::warn!(
                keyword = %params.keyword,
                model = %params.model,
                error = %e,
                "summary request failed"
            );
            SummaryResponse::failed()
        }
    }
}
