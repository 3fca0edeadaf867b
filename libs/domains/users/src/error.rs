use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// Client-facing message for email collisions.
pub const CONFLICT_MESSAGE: &str =
    "Database constraint violation. A resource with the provided email may already exist.";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found with id: {0}")]
    NotFound(i64),

    /// Unique constraint violation reported by storage
    #[error("Unique constraint violation: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Failure inside the service itself, reported as a generic 500
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User not found with id: {}", id)),
            UserError::Conflict(detail) => {
                tracing::debug!(detail = %detail, "Email uniqueness violated");
                AppError::Conflict(CONFLICT_MESSAGE.to_string())
            }
            UserError::Database(e) => AppError::Database(e),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
