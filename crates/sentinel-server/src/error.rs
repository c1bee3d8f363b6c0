//! HTTP error mapping: `{"detail": "..."}` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Core(sentinel_core::Error),
    Internal(String),
}

impl From<sentinel_core::Error> for ApiError {
    fn from(e: sentinel_core::Error) -> Self {
        Self::Core(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Core(e) if e.is_client_error() => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Core(e) => {
                tracing::error!("Request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::Internal(detail) => {
                tracing::error!("Request failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
