//! Job repository trait defining the interface for job persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::job::{Job, JobStatus};
use crate::domain::value_objects::{JobQuery, MonthlyCount};
use crate::errors::DomainError;

/// Repository trait for Job entity persistence operations
///
/// Ownership is not checked here; services run the ownership guard before
/// calling `update` or `delete`.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Persist a new job
    async fn create(&self, job: Job) -> Result<Job, DomainError>;

    /// Find a job by id regardless of owner
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError>;

    /// Overwrite an existing job
    ///
    /// # Returns
    /// * `Ok(Job)` - The stored job
    /// * `Err(DomainError::NotFound)` - No job with that id
    async fn update(&self, job: Job) -> Result<Job, DomainError>;

    /// Delete a job
    ///
    /// # Returns
    /// * `Ok(true)` - Job was deleted
    /// * `Ok(false)` - Job not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// One page of jobs matching the query, in the query's sort order
    async fn find(&self, query: &JobQuery) -> Result<Vec<Job>, DomainError>;

    /// Total number of jobs matching the query, ignoring pagination
    async fn count(&self, query: &JobQuery) -> Result<u64, DomainError>;

    /// Job count per status for one owner; statuses without jobs may be absent
    async fn count_by_status(&self, owner: Uuid) -> Result<Vec<(JobStatus, u64)>, DomainError>;

    /// Job count per calendar month of `created_at` for one owner
    ///
    /// Returns at most `limit` months, newest month first.
    async fn monthly_counts(
        &self,
        owner: Uuid,
        limit: usize,
    ) -> Result<Vec<MonthlyCount>, DomainError>;
}
