use article_parser::{extract, ExtractionResult};
use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /parse
///
/// The body is read as JSON whatever its `Content-Type` says.
pub async fn parse_url(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ExtractionResult>, ApiError> {
    let payload: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::Internal(e.to_string()))?;
    let url = requested_url(&payload).ok_or(ApiError::MissingUrl)?;

    let html = state.fetcher.fetch(&url).await?;

    // Parsing is CPU-bound; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || extract(&html))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!(
        url = %url,
        has_title = result.has_title(),
        has_date = result.has_date(),
        content_chars = result.content_length(),
        "page parsed"
    );
    Ok(Json(result))
}

/// The `url` field, or `None` when it is absent or falsy (`null`, `false`,
/// `0`, `""`). Other non-string values are passed on as their JSON text.
fn requested_url(payload: &Value) -> Option<String> {
    match payload.get("url")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
