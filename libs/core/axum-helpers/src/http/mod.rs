//! HTTP middleware: CORS, security headers and error path stamping.
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, error_path, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(error_path))
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer(&origins)?);
//! ```

pub mod cors;
pub mod error_path;
pub mod security;

pub use cors::{create_cors_layer, create_permissive_cors_layer};
pub use error_path::error_path;
pub use security::security_headers;
