//! HTTP error type
//!
//! Every failure is reported as `{"error": {"code": ..., "message": ...}}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use fyyur_common::Error;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Show refers to a venue or artist that does not exist (422)
    #[error("{0}")]
    InvalidShowReference(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(what) => ApiError::NotFound(what),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            // Rejected on create; a stored show with a dangling reference
            // falls through to 500
            err @ Error::InvalidShowReference { show_id: None, .. } => {
                ApiError::InvalidShowReference(err.to_string())
            }
            other => {
                error!("Request failed: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// A path segment that does not parse as an id names no resource
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}

/// Router fallback for unknown paths
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::InvalidShowReference(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_SHOW_REFERENCE",
                msg,
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg,
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
