//! Error codes used in structured logs.
//!
//! Each code carries an integer for log queries and a default client message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body missing, malformed or of the wrong shape
    InvalidJson,

    /// Path parameter could not be parsed
    InvalidPathParameter,

    NotFound,

    /// Request conflicts with a stored resource (e.g. duplicate email)
    Conflict,

    // Server errors
    InternalError,

    /// Route exists but does not accept the request method
    MethodNotAllowed,

    // Database errors (2000-2999)
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidPathParameter => "INVALID_PATH_PARAMETER",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: client and generic server errors
    /// - 2000-2999: database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidPathParameter => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Conflict => 1008,
            Self::MethodNotAllowed => 1006,
            Self::DatabaseError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidJson => "Failed to parse request body.",
            Self::InvalidPathParameter => "Invalid path parameter.",
            Self::NotFound => "The requested resource was not found.",
            Self::Conflict => "Database constraint violation.",
            Self::InternalError | Self::DatabaseError => {
                "An unexpected internal server error occurred."
            }
            Self::MethodNotAllowed => "Request method is not supported for this resource.",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
