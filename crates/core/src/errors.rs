//! Core error types for the SummerPlan planning engine.
//!
//! This module defines store-agnostic error types. Storage-specific failures
//! are converted into these types at the adapter boundary before they reach
//! the caller.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the planning core.
///
/// Transport and storage failures are wrapped in string form to keep this
/// type independent of any backing service.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Caller does not own row '{0}'")]
    NotOwner(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Preview commit mismatch: {0}")]
    PreviewConflict(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation failures returned to the caller synchronously.
///
/// A mutation payload that fails validation never reaches the store.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{0}' is out of range: {1}")]
    OutOfRange(String, String),

    #[error("Failed to parse date: {0}")]
    DateParse(String),
}

/// Store-agnostic transport error, surfaced verbatim. The core never
/// retries a failed store call.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Collection '{0}' is unavailable")]
    Unavailable(String),

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Server-side routine '{0}' is not available")]
    MissingRoutine(String),
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
