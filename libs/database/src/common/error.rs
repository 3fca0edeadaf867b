/// Error type for connection management and health checks.
///
/// Query errors from repositories stay as `sea_orm::DbErr` so callers can
/// inspect them (e.g. for unique constraint violations).
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
