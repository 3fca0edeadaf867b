//! Users API routes
//!
//! Wires the users domain to Postgres, or to the in-memory store when no
//! database is configured.

use axum::Router;
use domain_users::{InMemoryUserRepository, PgUserRepository, UserService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => handlers::router(UserService::new(PgUserRepository::new(db.clone()))),
        None => handlers::router(UserService::new(InMemoryUserRepository::new())),
    }
}
