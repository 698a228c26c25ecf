//! MySQL implementation of the JobRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use jt_core::domain::entities::job::{Job, JobStatus, JobType};
use jt_core::domain::value_objects::{JobQuery, JobSort, MonthlyCount};
use jt_core::errors::DomainError;
use jt_core::repositories::JobRepository;

use super::db_error;

const JOB_COLUMNS: &str =
    "id, company, position, status, job_type, job_location, created_by, created_at, updated_at";

/// MySQL implementation of JobRepository
pub struct MySqlJobRepository {
    pool: MySqlPool,
}

impl MySqlJobRepository {
    /// Create a new MySQL job repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Job entity
    fn row_to_job(row: &sqlx::mysql::MySqlRow) -> Result<Job, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let created_by: String = row
            .try_get("created_by")
            .map_err(|e| DomainError::Database(format!("Failed to get created_by: {}", e)))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| DomainError::Database(format!("Failed to get status: {}", e)))?;
        let job_type: String = row
            .try_get("job_type")
            .map_err(|e| DomainError::Database(format!("Failed to get job_type: {}", e)))?;

        Ok(Job {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            company: row
                .try_get("company")
                .map_err(|e| DomainError::Database(format!("Failed to get company: {}", e)))?,
            position: row
                .try_get("position")
                .map_err(|e| DomainError::Database(format!("Failed to get position: {}", e)))?,
            status: status.parse::<JobStatus>().map_err(DomainError::Database)?,
            job_type: job_type.parse::<JobType>().map_err(DomainError::Database)?,
            job_location: row
                .try_get("job_location")
                .map_err(|e| DomainError::Database(format!("Failed to get job_location: {}", e)))?,
            created_by: Uuid::parse_str(&created_by)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    /// Appends the WHERE clause shared by `find` and `count`
    fn push_filters(builder: &mut QueryBuilder<'_, MySql>, query: &JobQuery) {
        builder
            .push(" WHERE created_by = ")
            .push_bind(query.owner.to_string());

        if let Some(status) = query.status.as_option() {
            builder.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(job_type) = query.job_type.as_option() {
            builder.push(" AND job_type = ").push_bind(job_type.as_str());
        }
        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            builder
                .push(" AND LOWER(position) LIKE ")
                .push_bind(format!("%{}%", escape_like(&search.to_lowercase())));
        }
    }

    fn order_by(sort: JobSort) -> &'static str {
        match sort {
            JobSort::Latest => " ORDER BY created_at DESC, id",
            JobSort::Oldest => " ORDER BY created_at ASC, id",
            JobSort::AToZ => " ORDER BY position ASC, id",
            JobSort::ZToA => " ORDER BY position DESC, id",
        }
    }
}

/// Escapes `LIKE` wildcards so user search text matches literally
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl JobRepository for MySqlJobRepository {
    async fn create(&self, job: Job) -> Result<Job, DomainError> {
        let query = r#"
            INSERT INTO jobs (id, company, position, status, job_type,
                              job_location, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(job.id.to_string())
            .bind(&job.company)
            .bind(&job.position)
            .bind(job.status.as_str())
            .bind(job.job_type.as_str())
            .bind(&job.job_location)
            .bind(job.created_by.to_string())
            .bind(job.created_at)
            .bind(job.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create job", e))?;

        tracing::debug!(job_id = %job.id, "Job created");
        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        let query = format!("SELECT {} FROM jobs WHERE id = ? LIMIT 1", JOB_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find job", e))?;

        row.as_ref().map(Self::row_to_job).transpose()
    }

    async fn update(&self, job: Job) -> Result<Job, DomainError> {
        let query = r#"
            UPDATE jobs
            SET company = ?, position = ?, status = ?, job_type = ?,
                job_location = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&job.company)
            .bind(&job.position)
            .bind(job.status.as_str())
            .bind(job.job_type.as_str())
            .bind(&job.job_location)
            .bind(job.updated_at)
            .bind(job.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update job", e))?;

        if result.rows_affected() == 0 && self.find_by_id(job.id).await?.is_none() {
            return Err(DomainError::job_not_found(job.id));
        }

        Ok(job)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete job", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, query: &JobQuery) -> Result<Vec<Job>, DomainError> {
        let mut builder = QueryBuilder::<MySql>::new(format!("SELECT {} FROM jobs", JOB_COLUMNS));
        Self::push_filters(&mut builder, query);
        builder.push(Self::order_by(query.sort));
        builder
            .push(" LIMIT ")
            .push_bind(query.pagination.limit())
            .push(" OFFSET ")
            .push_bind(query.pagination.offset());

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list jobs", e))?;

        rows.iter().map(Self::row_to_job).collect()
    }

    async fn count(&self, query: &JobQuery) -> Result<u64, DomainError> {
        let mut builder = QueryBuilder::<MySql>::new("SELECT COUNT(*) AS count FROM jobs");
        Self::push_filters(&mut builder, query);

        let row = builder
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to count jobs", e))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| DomainError::Database(format!("Failed to get count: {}", e)))?;

        Ok(count.max(0) as u64)
    }

    async fn count_by_status(&self, owner: Uuid) -> Result<Vec<(JobStatus, u64)>, DomainError> {
        let query = r#"
            SELECT status, COUNT(*) AS count
            FROM jobs
            WHERE created_by = ?
            GROUP BY status
        "#;

        let rows = sqlx::query(query)
            .bind(owner.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to aggregate job statuses", e))?;

        rows.iter()
            .map(|row| {
                let status: String = row
                    .try_get("status")
                    .map_err(|e| DomainError::Database(format!("Failed to get status: {}", e)))?;
                let count: i64 = row
                    .try_get("count")
                    .map_err(|e| DomainError::Database(format!("Failed to get count: {}", e)))?;
                let status = status.parse::<JobStatus>().map_err(DomainError::Database)?;
                Ok((status, count.max(0) as u64))
            })
            .collect()
    }

    async fn monthly_counts(
        &self,
        owner: Uuid,
        limit: usize,
    ) -> Result<Vec<MonthlyCount>, DomainError> {
        let query = r#"
            SELECT CAST(YEAR(created_at) AS SIGNED) AS year,
                   CAST(MONTH(created_at) AS SIGNED) AS month,
                   COUNT(*) AS count
            FROM jobs
            WHERE created_by = ?
            GROUP BY year, month
            ORDER BY year DESC, month DESC
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(owner.to_string())
            .bind(limit as u64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to aggregate monthly applications", e))?;

        rows.iter()
            .map(|row| {
                let year: i64 = row
                    .try_get("year")
                    .map_err(|e| DomainError::Database(format!("Failed to get year: {}", e)))?;
                let month: i64 = row
                    .try_get("month")
                    .map_err(|e| DomainError::Database(format!("Failed to get month: {}", e)))?;
                let count: i64 = row
                    .try_get("count")
                    .map_err(|e| DomainError::Database(format!("Failed to get count: {}", e)))?;
                Ok(MonthlyCount {
                    year: year as i32,
                    month: month as u32,
                    count: count.max(0) as u64,
                })
            })
            .collect()
    }
}
