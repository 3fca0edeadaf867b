pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use sea_orm::{DbErr, SqlErr};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body returned for every error response.
///
/// ```json
/// {
///   "timestamp": "2024-11-29T10:15:30.123Z",
///   "message": "User not found with id: 99",
///   "status": 404,
///   "error": "Not Found",
///   "path": "/api/v1/users/99"
/// }
/// ```
///
/// `path` is left empty when the response is built and filled in by the
/// [`error_path`](crate::http::error_path) middleware, which sees the
/// original request URI. The response also carries a copy of the body as an
/// extension so that middleware can find it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// When the error was produced (RFC 3339, UTC)
    pub timestamp: DateTime<Utc>,
    pub message: String,
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase for `status`
    pub error: String,
    /// Request path that produced the error
    pub path: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            path: String::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status_code(), Json(self.clone())).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type; it is the only place that decides
/// status codes and client-facing messages. Server-side failures are logged
/// with full detail and reported to the client with a generic message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Status and client-facing message, logging the error on the way.
    fn parts(self) -> (StatusCode, String) {
        match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON extraction error: {}",
                    e
                );
                (e.status(), e.body_text())
            }
            AppError::PathRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidPathParameter.code(),
                    "Path extraction error: {}",
                    e
                );
                (e.status(), e.body_text())
            }
            AppError::BadRequest(msg) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidPathParameter.code(),
                    "Bad request: {}",
                    msg
                );
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Conflict(msg) => {
                tracing::info!(error_code = ErrorCode::Conflict.code(), "Conflict: {}", msg);
                (StatusCode::CONFLICT, msg)
            }
            AppError::Database(e) => map_db_error(e),
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError.default_message().to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.parts();
        ErrorResponse::new(status, message).into_response()
    }
}

/// Unique violations are a client problem (409); everything else is a 500.
fn map_db_error(error: DbErr) -> (StatusCode, String) {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = error.sql_err() {
        tracing::info!(
            error_code = ErrorCode::Conflict.code(),
            "Unique constraint violation: {}",
            detail
        );
        return (
            StatusCode::CONFLICT,
            ErrorCode::Conflict.default_message().to_string(),
        );
    }

    tracing::error!(
        error_code = ErrorCode::DatabaseError.code(),
        "Database error: {:?}",
        error
    );
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::DatabaseError.default_message().to_string(),
    )
}
