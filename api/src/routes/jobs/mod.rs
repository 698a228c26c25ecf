//! Job route handlers, all behind the authentication middleware
//!
//! - `POST /api/v1/jobs`
//! - `GET /api/v1/jobs`
//! - `GET /api/v1/jobs/stats`
//! - `PATCH /api/v1/jobs/{id}`
//! - `DELETE /api/v1/jobs/{id}`

pub mod create;
pub mod delete;
pub mod list;
pub mod stats;
pub mod update;

pub use create::create_job;
pub use delete::delete_job;
pub use list::get_all_jobs;
pub use stats::show_stats;
pub use update::update_job;

use uuid::Uuid;

use jt_core::errors::DomainError;

/// Parses a job id path segment; anything that is not a UUID cannot exist
pub(crate) fn parse_job_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::job_not_found(raw))
}
