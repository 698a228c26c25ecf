//! Main job service implementation

use std::sync::Arc;
use uuid::Uuid;

use jt_shared::Pagination;

use crate::domain::entities::job::{
    Job, JobStatus, JobType, COMPANY_MAX_LENGTH, DEFAULT_JOB_LOCATION, POSITION_MAX_LENGTH,
};
use crate::domain::value_objects::{
    JobFilter, JobQuery, JobSort, JobStats, JobsPage, MonthlyApplication, StatusCounts,
    MONTHS_IN_STATS,
};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::JobRepository;
use crate::services::ownership::check_permissions;

use super::types::{CreateJobCommand, JobSearchParams, UpdateJobCommand};

/// Service for the requesting user's job applications
pub struct JobService<J>
where
    J: JobRepository,
{
    /// Job repository for database operations
    job_repository: Arc<J>,
}

impl<J> JobService<J>
where
    J: JobRepository,
{
    /// Create a new job service
    pub fn new(job_repository: Arc<J>) -> Self {
        Self { job_repository }
    }

    /// Create a job owned by `requester`
    ///
    /// Company and position are required; status, job type and location
    /// fall back to their defaults.
    pub async fn create_job(&self, requester: Uuid, command: CreateJobCommand) -> DomainResult<Job> {
        let company = ValidationError::require("company", command.company)?;
        let position = ValidationError::require("position", command.position)?;
        validate_company_and_position(&company, &position)?;

        let status = ValidationError::parse_optional::<JobStatus>("status", command.status.as_deref())?;
        let job_type = ValidationError::parse_optional::<JobType>("jobType", command.job_type.as_deref())?;

        let mut job = Job::new(company, position, requester);
        job.status = status.unwrap_or_default();
        job.job_type = job_type.unwrap_or_default();
        job.job_location = command
            .job_location
            .map(|location| location.trim().to_string())
            .filter(|location| !location.is_empty())
            .unwrap_or_else(|| DEFAULT_JOB_LOCATION.to_string());

        let job = self.job_repository.create(job).await?;
        tracing::info!(job_id = %job.id, user_id = %requester, "Job created");
        Ok(job)
    }

    /// List the requester's jobs with filters, search, sort and paging
    ///
    /// Unknown status, job type or sort values are validation errors.
    pub async fn list_jobs(&self, requester: Uuid, params: JobSearchParams) -> DomainResult<JobsPage> {
        let query = build_query(requester, params)?;

        let jobs = self.job_repository.find(&query).await?;
        let total_jobs = self.job_repository.count(&query).await?;

        Ok(JobsPage {
            jobs,
            total_jobs,
            num_of_pages: query.pagination.total_pages(total_jobs),
        })
    }

    /// Update a job owned by the requester
    ///
    /// Order of checks: required fields, job exists, ownership.
    pub async fn update_job(
        &self,
        requester: Uuid,
        job_id: Uuid,
        command: UpdateJobCommand,
    ) -> DomainResult<Job> {
        let company = ValidationError::require("company", command.company)?;
        let position = ValidationError::require("position", command.position)?;
        let job_location = ValidationError::require("jobLocation", command.job_location)?;
        validate_company_and_position(&company, &position)?;

        let status = ValidationError::parse_optional::<JobStatus>("status", command.status.as_deref())?;
        let job_type = ValidationError::parse_optional::<JobType>("jobType", command.job_type.as_deref())?;

        let mut job = self.load_job(job_id).await?;
        check_permissions(&requester, &job.created_by)?;

        job.company = company;
        job.position = position;
        job.job_location = job_location;
        if let Some(status) = status {
            job.status = status;
        }
        if let Some(job_type) = job_type {
            job.job_type = job_type;
        }
        job.touch();

        let job = self.job_repository.update(job).await?;
        tracing::info!(job_id = %job.id, user_id = %requester, "Job updated");
        Ok(job)
    }

    /// Delete a job owned by the requester
    pub async fn delete_job(&self, requester: Uuid, job_id: Uuid) -> DomainResult<()> {
        let job = self.load_job(job_id).await?;
        check_permissions(&requester, &job.created_by)?;

        if !self.job_repository.delete(job_id).await? {
            return Err(DomainError::job_not_found(job_id));
        }

        tracing::info!(job_id = %job_id, user_id = %requester, "Job deleted");
        Ok(())
    }

    /// Status totals and the last six months of applications
    pub async fn show_stats(&self, requester: Uuid) -> DomainResult<JobStats> {
        let by_status = self.job_repository.count_by_status(requester).await?;
        let months = self
            .job_repository
            .monthly_counts(requester, MONTHS_IN_STATS)
            .await?;

        // Repository returns newest first; the chart wants oldest first.
        let monthly_applications = months
            .iter()
            .rev()
            .filter_map(MonthlyApplication::from_count)
            .collect();

        Ok(JobStats {
            default_stats: StatusCounts::from_rows(&by_status),
            monthly_applications,
        })
    }

    async fn load_job(&self, job_id: Uuid) -> DomainResult<Job> {
        self.job_repository
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| DomainError::job_not_found(job_id))
    }
}

fn validate_company_and_position(company: &str, position: &str) -> Result<(), ValidationError> {
    ValidationError::check_length("company", company, 1, Some(COMPANY_MAX_LENGTH))?;
    ValidationError::check_length("position", position, 1, Some(POSITION_MAX_LENGTH))
}

fn build_query(owner: Uuid, params: JobSearchParams) -> Result<JobQuery, ValidationError> {
    let status = ValidationError::parse_optional::<JobFilter<JobStatus>>("status", params.status.as_deref())?
        .unwrap_or_default();
    let job_type = ValidationError::parse_optional::<JobFilter<JobType>>("jobType", params.job_type.as_deref())?
        .unwrap_or_default();
    let sort = ValidationError::parse_optional::<JobSort>("sort", params.sort.as_deref())?
        .unwrap_or_default();
    let search = params
        .search
        .map(|search| search.trim().to_string())
        .filter(|search| !search.is_empty());

    Ok(JobQuery {
        owner,
        status,
        job_type,
        search,
        sort,
        pagination: Pagination::from_query(params.page, params.limit),
    })
}
