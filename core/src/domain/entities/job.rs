//! Job entity representing a tracked job application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Default value for `job_location` when none is supplied
pub const DEFAULT_JOB_LOCATION: &str = "my city";

pub const COMPANY_MAX_LENGTH: usize = 50;
pub const POSITION_MAX_LENGTH: usize = 100;

/// Application status of a job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Interview,
    Declined,
    #[default]
    Pending,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Interview => "interview",
            JobStatus::Declined => "declined",
            JobStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interview" => Ok(JobStatus::Interview),
            "declined" => Ok(JobStatus::Declined),
            "pending" => Ok(JobStatus::Pending),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

/// Employment type of a job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Remote,
    Internship,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Remote => "remote",
            JobType::Internship => "internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "remote" => Ok(JobType::Remote),
            "internship" => Ok(JobType::Internship),
            _ => Err(format!("Invalid job type: {}", s)),
        }
    }
}

/// Job application owned by the user that created it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier for the job
    pub id: Uuid,

    /// Company name
    pub company: String,

    /// Position applied for
    pub position: String,

    /// Current application status
    pub status: JobStatus,

    /// Employment type
    pub job_type: JobType,

    /// Where the job is located
    pub job_location: String,

    /// Owning user
    pub created_by: Uuid,

    /// Timestamp when the job was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the job was last updated
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Creates a new pending, full-time job owned by `created_by`
    pub fn new(company: String, position: String, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            company,
            position,
            status: JobStatus::default(),
            job_type: JobType::default(),
            job_location: DEFAULT_JOB_LOCATION.to_string(),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` owns this job
    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.created_by == *user_id
    }

    /// Bumps `updated_at` after a mutation
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
