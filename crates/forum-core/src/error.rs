//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures raised before or after persistence.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} with ID {id} not found")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("{0}")]
    Validation(String),

    #[error("Invalid ID: {0}")]
    InvalidId(String),
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

    /// A foreign reference points at a row that does not exist.
    #[error("Missing reference: {0}")]
    MissingReference(String),
}
