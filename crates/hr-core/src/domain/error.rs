//! Domain-level errors

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Performance rating out of range: {0} (expected 1-5)")]
    RatingOutOfRange(i64),
    #[error("Unknown department: {0}")]
    UnknownDepartment(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
