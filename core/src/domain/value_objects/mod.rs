//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod job_query;
pub mod job_stats;

// Re-export commonly used types
pub use auth_response::{AuthResponse, PublicUser};
pub use job_query::{JobFilter, JobQuery, JobSort, JobsPage};
pub use job_stats::{JobStats, MonthlyApplication, MonthlyCount, StatusCounts, MONTHS_IN_STATS};
