//! Readiness endpoint backed by a real database ping.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use serde_json::json;

use crate::state::AppState;

/// `/ready`, mounted next to `/health` outside the `/api` prefix.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}

/// 200 when the database answers `SELECT 1`, 503 otherwise.
///
/// The in-memory store is always ready.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let Some(db) = state.db.as_ref() else {
        return (
            StatusCode::OK,
            Json(json!({ "status": "ready", "database": state.backend() })),
        )
            .into_response();
    };

    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(db)
                .await
                .map_err(|e| format!("Database ping failed: {}", e))
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
