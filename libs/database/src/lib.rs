//! PostgreSQL plumbing shared by the services in this workspace.
//!
//! - [`postgres`]: connection pool configuration, connect helpers with
//!   startup retry, migration runner and health checks.
//! - [`repository`]: [`BaseRepository`], a thin generic wrapper over SeaORM
//!   entity operations that domain repositories build on.
//! - [`common`]: the shared [`DatabaseError`] type and retry helpers.
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config(PostgresConfig::new(url)).await?;
//! postgres::run_migrations::<Migrator>(&db, "users_api").await?;
//! ```

pub mod common;
pub mod postgres;
pub mod repository;

pub use common::{DatabaseError, DatabaseResult};
pub use repository::BaseRepository;
