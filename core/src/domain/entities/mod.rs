//! Domain entities representing core business objects.

pub mod job;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use job::{Job, JobStatus, JobType, DEFAULT_JOB_LOCATION};
pub use token::{Claims, DEFAULT_TOKEN_LIFETIME_DAYS};
pub use user::{mask_email, normalize_email, User, DEFAULT_LAST_NAME, DEFAULT_LOCATION};
