use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness probe. Never touches the provider.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}

/// Serve the configured landing page as stored on disk, without decoding it.
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    let path = &state.config.index_path;
    match tokio::fs::read(path).await {
        Ok(bytes) => Html(bytes).into_response(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Index page unavailable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
