use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::core::tts::Voice;
use crate::errors::app_error::AppResult;
use crate::state::AppState;

/// List every voice the provider offers, concatenated across pages.
pub async fn list_voices(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Voice>>> {
    let voices = state.voices.list_voices().await?;
    Ok(Json(voices))
}
