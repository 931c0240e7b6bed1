//! HTTP API for summarizing videos.
//!
//! `POST /summarize` takes `{"youtube_url": "..."}` and answers with
//! `{"video_id": "...", "summary": "..."}` or `{"error": "..."}`.

use crate::error::RecapError;
use crate::orchestrator::{Orchestrator, VideoSummary};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared application state.
pub struct AppState {
    pub orchestrator: Orchestrator,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub youtube_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RecapError {
    fn into_response(self) -> Response {
        let status = match &self {
            RecapError::MissingUrl | RecapError::InvalidUrl => StatusCode::BAD_REQUEST,
            RecapError::TranscriptUnavailable => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/summarize", post(summarize_video))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn summarize_video(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<VideoSummary>, RecapError> {
    let youtube_url = match payload {
        Ok(Json(req)) => req.youtube_url.filter(|url| !url.is_empty()),
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection);
            None
        }
    }
    .ok_or(RecapError::MissingUrl)?;

    let result = state.orchestrator.summarize_url(&youtube_url).await?;
    Ok(Json(result))
}
