use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    ErrorResponse::new(StatusCode::NOT_FOUND, ErrorCode::NotFound.default_message())
        .with_path(uri.path())
        .into_response()
}

/// Fallback for known routes hit with an unsupported method.
///
/// The path is left for [`crate::http::error_path`], since nested routers
/// only see the URI relative to their mount point.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    tracing::debug!(
        error_code = ErrorCode::MethodNotAllowed.code(),
        method = %method,
        path = %uri.path(),
        "Method not allowed"
    );
    ErrorResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Request method '{}' is not supported.", method),
    )
    .into_response()
}
