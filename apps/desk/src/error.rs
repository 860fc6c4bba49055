//! # App Error Type
//!
//! Unified error type for desk commands.
//!
//! Every failure reaching the operator carries a machine-readable code
//! and a human-readable message. Core and database errors convert into
//! it at the command boundary; raw sqlx details are logged, not shown.

use serde::Serialize;

use lodge_core::CoreError;
use lodge_db::DbError;

/// Error returned from desk commands.
///
/// ## Serialization
/// With `--json`, failures print as:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Booking not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for scripted callers
    pub code: ErrorCode,

    /// Human-readable error message for the operator
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Booking (or other resource) not found
    NotFound,

    /// Operator input failed validation
    ValidationError,

    /// Database operation failed
    DatabaseError,

    /// Configuration file or override is unusable
    ConfigError,

    /// Receipt file could not be written
    IoError,

    /// Anything else
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ConfigError, message)
    }
}

/// Converts database errors to app errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => AppError::not_found(&entity, &id),
            DbError::ConstraintViolation { message } => {
                tracing::error!("Constraint violation: {}", message);
                AppError::new(ErrorCode::ValidationError, "Booking data rejected by store")
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Migration failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                AppError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidNights { .. }
            | CoreError::InvalidTaxRate { .. }
            | CoreError::Validation(_) => AppError::validation(err.to_string()),
            CoreError::MissingField { .. } => {
                AppError::new(ErrorCode::ValidationError, err.to_string())
            }
        }
    }
}

/// Converts I/O errors (receipt writing) to app errors.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::IoError, format!("File operation failed: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
