//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{AuthError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Database error: {0}")]
    Database(String),

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Not-found error for a job id
    pub fn job_not_found(id: impl std::fmt::Display) -> Self {
        DomainError::NotFound {
            resource: format!("job with id {}", id),
        }
    }

    /// Not-found error for a user id
    pub fn user_not_found(id: impl std::fmt::Display) -> Self {
        DomainError::NotFound {
            resource: format!("user with id {}", id),
        }
    }

    /// Whether the error is caused by the server rather than the request
    pub fn is_internal(&self) -> bool {
        matches!(self, DomainError::Internal { .. } | DomainError::Database(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
