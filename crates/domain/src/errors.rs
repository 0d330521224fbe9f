//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidMonth;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Month number outside 1-12
    #[error(transparent)]
    InvalidMonth(#[from] InvalidMonth),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Date parsing or date arithmetic error
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
