use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{api, read, voices};
use crate::state::AppState;
use std::sync::Arc;

/// Create the API router
///
/// CORS and security headers are applied in main.rs on top of this router.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health_check))
        .route("/voices", get(voices::list_voices))
        .route("/read", get(read::read_text))
        .layer(TraceLayer::new_for_http())
}
