use article_parser::FetchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

const FALLBACK_MESSAGE: &str = "Failed to parse URL";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("URL is required")]
    MissingUrl,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::MissingUrl => (StatusCode::BAD_REQUEST, "URL is required".to_string()),
            ApiError::Fetch(FetchError::EmptyBody) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Received empty page".to_string(),
            ),
            ApiError::Fetch(err) => match err.status() {
                Some(code) => (
                    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
                    format!("Failed to load page. Status: {code}"),
                ),
                None => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error loading URL: {err}"),
                ),
            },
            ApiError::Internal(msg) if msg.trim().is_empty() => (
                StatusCode::INTERNAL_SERVER_ERROR,
                FALLBACK_MESSAGE.to_string(),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        match &self {
            ApiError::Internal(_) => tracing::error!(%status, error = %message, "parse request failed"),
            _ => tracing::warn!(%status, error = %message, "parse request rejected"),
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
