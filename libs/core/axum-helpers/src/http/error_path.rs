use axum::{
    body::Body,
    extract::{OriginalUri, Request},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::errors::ErrorResponse;

/// Fills the `path` field of error bodies with the original request path.
///
/// Errors are rendered deep inside handlers and extractors, which only see
/// the URI relative to their nest point. This middleware finds responses
/// carrying an [`ErrorResponse`] extension and re-renders their body.
///
/// Must sit inside any compression layer, since the body is replaced as
/// plain JSON.
pub async fn error_path(request: Request, next: Next) -> Response {
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.path().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let mut response = next.run(request).await;

    let Some(mut error) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };
    if error.path.is_empty() {
        error.path = path;
    }

    let body = match serde_json::to_vec(&error) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Failed to re-serialize error response: {}", e);
            return response;
        }
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.extensions.insert(error);
    Response::from_parts(parts, Body::from(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use axum::{Router, http::StatusCode, middleware, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn missing() -> Result<&'static str, AppError> {
        Err(AppError::NotFound("User not found with id: 7".to_string()))
    }

    fn app() -> Router {
        let nested = Router::new()
            .route("/users/{id}", get(missing))
            .route("/ok", get(|| async { "fine" }));

        Router::new()
            .nest("/api", nested)
            .layer(middleware::from_fn(error_path))
    }

    #[tokio::test]
    async fn test_error_body_gets_full_request_path() {
        let response = app()
            .oneshot(
                axum::http::Request::get("/api/users/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.path, "/api/users/7");
        assert_eq!(body.message, "User not found with id: 7");
    }

    #[tokio::test]
    async fn test_successful_response_untouched() {
        let response = app()
            .oneshot(axum::http::Request::get("/api/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"fine");
    }
}
