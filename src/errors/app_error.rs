use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::core::tts::ProviderError;

/// Detail returned for every request rejected by local validation.
pub const INVALID_PARAMETERS: &str = "Invalid parameters";

/// Errors surfaced by the HTTP API
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-supplied parameters failed local validation. Never reaches the provider.
    #[error("Invalid parameters")]
    InvalidRequest,

    /// The provider call failed, including a failed fallback attempt.
    #[error("{0}")]
    Upstream(String),

    /// The provider kept returning continuation tokens past the page limit.
    #[error("Voice listing exceeded {pages} pages without completing")]
    PaginationLimitExceeded { pages: usize },
}

pub type AppResult<T> = Result<T, AppError>;

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        AppError::Upstream(error.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::PaginationLimitExceeded { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {}", self);
        }

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::time::Duration;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_request_is_400() {
        let (status, body) = body_json(AppError::InvalidRequest).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], INVALID_PARAMETERS);
    }

    #[tokio::test]
    async fn test_upstream_message_passes_through() {
        let message = "An error occurred (AccessDeniedException): not authorized";
        let (status, body) = body_json(AppError::Upstream(message.to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], message);
    }

    #[tokio::test]
    async fn test_pagination_limit_is_500() {
        let (status, body) = body_json(AppError::PaginationLimitExceeded { pages: 100 }).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().contains("100 pages"));
    }

    #[test]
    fn test_provider_errors_become_upstream() {
        let markup: AppError = ProviderError::InvalidMarkup("InvalidSsmlException".into()).into();
        assert!(matches!(markup, AppError::Upstream(ref m) if m == "InvalidSsmlException"));

        let timeout: AppError = ProviderError::Timeout(Duration::from_secs(30)).into();
        assert!(matches!(timeout, AppError::Upstream(ref m) if m.contains("timed out")));
    }
}
