//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! The HTTP layer decides which status code each one maps to.

use thiserror::Error;

use crate::models::ContactValidationError;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Request payload failed presence validation
    #[error("Validation error: {0}")]
    Validation(#[from] ContactValidationError),
    /// Referenced identifier does not exist
    #[error("Resource not found")]
    NotFound,
    /// Document store unreachable or rejected the operation
    #[error("Store error: {0}")]
    Store(String),
    /// Mail relay failed to accept the message
    #[error("Relay error: {0}")]
    Relay(String),
}

// Conversion from MongoDB driver errors (used in infrastructure layer)
impl From<mongodb::error::Error> for DomainError {
    fn from(e: mongodb::error::Error) -> Self {
        DomainError::Store(e.to_string())
    }
}
