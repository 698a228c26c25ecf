//! MySQL repository implementations

pub mod job_repository_impl;
pub mod user_repository_impl;

pub use job_repository_impl::MySqlJobRepository;
pub use user_repository_impl::MySqlUserRepository;

use jt_core::errors::DomainError;

/// Wraps a driver error as a domain database error
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, context, "Database operation failed");
    DomainError::Database(format!("{}: {}", context, e))
}

/// Whether the error is a unique-key violation
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map_or(false, |db_err| db_err.is_unique_violation())
}
