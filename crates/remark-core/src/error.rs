//! Domain-level error types.

use thiserror::Error;

use crate::domain::FieldError;

/// Domain errors - business logic failures.
///
/// Every failure a use case can report falls into one of these three kinds.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {} field error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}
