//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.

use std::sync::Arc;
use thiserror::Error;

/// SQLSTATE raised by Postgres when a foreign key points at a missing row.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// SQLSTATE for `NOT NULL` violations.
const NOT_NULL_VIOLATION: &str = "23502";
/// SQLSTATE for `CHECK` constraint violations (e.g. `salary > 0`).
const CHECK_VIOLATION: &str = "23514";
/// SQLSTATE class for data exceptions (value too long, numeric overflow, bad format).
const DATA_EXCEPTION_CLASS: &str = "22";

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// Operator input broke a local rule (empty text, non-positive salary).
    #[error("Validation Error: {0}")]
    Validation(String),

    /// A foreign reference supplied to a mutation does not exist.
    #[error("Constraint Error: {0}")]
    Constraint(String),

    /// An update targeted a row that does not exist.
    #[error("Not Found: {0}")]
    NotFound(String),

    /// The data store could not be reached or a query failed for infrastructural reasons.
    #[error("Database Unavailable: {0}")]
    StoreUnavailable(Arc<sqlx::Error>),

    /// Invalid or missing configuration.
    #[error("Configuration Error: {0}")]
    Config(String),

    /// Error related to standard I/O operations.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Prompt Error: {0}")]
    Prompt(Arc<dialoguer::Error>),

    /// The operator dismissed a prompt (Esc / Ctrl+C).
    #[error("Prompt cancelled")]
    Cancelled,

    /// A choice prompt had nothing to choose from.
    #[error("No options available for: {0}")]
    NoChoices(String),

    /// Error while serializing output as JSON.
    #[error("Render Error: {0}")]
    Render(Arc<serde_json::Error>),
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let code = match &err {
            sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
            _ => None,
        };

        match code.as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => AppError::Constraint(
                constraint_message(&err).unwrap_or_else(|| "referenced row does not exist".into()),
            ),
            Some(NOT_NULL_VIOLATION) | Some(CHECK_VIOLATION) => AppError::Validation(
                constraint_message(&err).unwrap_or_else(|| "value rejected by the database".into()),
            ),
            Some(code) if code.starts_with(DATA_EXCEPTION_CLASS) => AppError::Validation(
                constraint_message(&err).unwrap_or_else(|| "value rejected by the database".into()),
            ),
            _ => AppError::StoreUnavailable(Arc::new(err)),
        }
    }
}

fn constraint_message(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => Some(db_err.message().to_string()),
        _ => None,
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Prompt(Arc::new(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Render(Arc::new(err))
    }
}
