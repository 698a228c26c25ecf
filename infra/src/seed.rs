//! Bulk loading of job fixtures.
//!
//! Fixtures are a JSON array of jobs in the public camelCase shape:
//!
//! ```json
//! [{ "company": "Acme", "position": "Engineer", "status": "interview",
//!    "jobType": "remote", "jobLocation": "Oslo",
//!    "createdBy": "0b7c...", "createdAt": "2024-03-01T10:00:00Z" }]
//! ```

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use jt_core::domain::entities::job::{Job, JobStatus, JobType, DEFAULT_JOB_LOCATION};

use crate::database::DatabasePool;
use crate::InfrastructureError;

/// One job record from a fixture file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedJob {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub job_type: JobType,
    #[serde(default)]
    pub job_location: Option<String>,
    pub created_by: Uuid,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl SeedJob {
    /// Converts the fixture into a job with a fresh id
    pub fn into_job(self) -> Job {
        let mut job = Job::new(self.company, self.position, self.created_by);
        job.status = self.status;
        job.job_type = self.job_type;
        job.job_location = self
            .job_location
            .unwrap_or_else(|| DEFAULT_JOB_LOCATION.to_string());
        if let Some(created_at) = self.created_at {
            job.created_at = created_at;
            job.updated_at = created_at;
        }
        job
    }
}

/// Parses a fixture document
pub fn parse_seed_jobs(raw: &str) -> Result<Vec<SeedJob>, InfrastructureError> {
    Ok(serde_json::from_str(raw)?)
}

/// Replaces every stored job with `jobs` in a single transaction
///
/// # Returns
/// * `Ok(usize)` - Number of jobs inserted
pub async fn populate_jobs(
    pool: &DatabasePool,
    jobs: Vec<SeedJob>,
) -> Result<usize, InfrastructureError> {
    let mut tx = pool.get_pool().begin().await?;

    let removed = sqlx::query("DELETE FROM jobs").execute(&mut *tx).await?;
    tracing::info!(removed = removed.rows_affected(), "Cleared existing jobs");

    let total = jobs.len();
    for seed in jobs {
        let job = seed.into_job();
        sqlx::query(
            r#"
            INSERT INTO jobs (id, company, position, status, job_type,
                              job_location, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(job.id.to_string())
        .bind(&job.company)
        .bind(&job.position)
        .bind(job.status.as_str())
        .bind(job.job_type.as_str())
        .bind(&job.job_location)
        .bind(job.created_by.to_string())
        .bind(job.created_at)
        .bind(job.updated_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(inserted = total, "Seeded jobs");

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: &str = "6f1e4a1c-2b8d-4c53-9a55-0d6f2f8f4b11";

    #[test]
    fn test_parse_full_record() {
        let raw = format!(
            r#"[{{"company":"Acme","position":"Backend Engineer","status":"interview",
                "jobType":"part-time","jobLocation":"Berlin","createdBy":"{}",
                "createdAt":"2024-03-01T10:00:00Z"}}]"#,
            OWNER
        );

        let jobs = parse_seed_jobs(&raw).unwrap();
        assert_eq!(jobs.len(), 1);

        let job = jobs[0].clone().into_job();
        assert_eq!(job.company, "Acme");
        assert_eq!(job.status, JobStatus::Interview);
        assert_eq!(job.job_type, JobType::PartTime);
        assert_eq!(job.job_location, "Berlin");
        assert_eq!(job.created_by.to_string(), OWNER);
        assert_eq!(job.created_at.to_rfc3339(), "2024-03-01T10:00:00+00:00");
        assert_eq!(job.created_at, job.updated_at);
    }

    #[test]
    fn test_parse_applies_defaults() {
        let raw = format!(
            r#"[{{"company":"Acme","position":"Engineer","createdBy":"{}"}}]"#,
            OWNER
        );

        let job = parse_seed_jobs(&raw).unwrap().remove(0).into_job();
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.job_type, JobType::FullTime);
        assert_eq!(job.job_location, DEFAULT_JOB_LOCATION);
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let raw = format!(
            r#"[{{"company":"Acme","position":"Engineer","status":"ghosted","createdBy":"{}"}}]"#,
            OWNER
        );

        assert!(matches!(
            parse_seed_jobs(&raw),
            Err(InfrastructureError::Seed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_seed_jobs(r#"{"company":"Acme"}"#).is_err());
    }
}
