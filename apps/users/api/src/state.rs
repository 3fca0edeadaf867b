//! Shared application state passed to the API routers.

use sea_orm::DatabaseConnection;

/// Cloned into each router; the connection shares one pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// `None` when running on the in-memory user store
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn backend(&self) -> &'static str {
        if self.db.is_some() {
            "postgres"
        } else {
            "in-memory"
        }
    }
}
