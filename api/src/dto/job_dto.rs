//! Job request and response bodies

use serde::{Deserialize, Serialize};
use validator::Validate;

use jt_core::domain::entities::job::Job;
use jt_core::services::{CreateJobCommand, JobSearchParams, UpdateJobCommand};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub job_type: Option<String>,
    #[validate(length(max = 255))]
    pub job_location: Option<String>,
}

impl From<CreateJobRequest> for CreateJobCommand {
    fn from(request: CreateJobRequest) -> Self {
        Self {
            company: request.company,
            position: request.position,
            status: request.status,
            job_type: request.job_type,
            job_location: request.job_location,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub job_type: Option<String>,
    #[validate(length(max = 255))]
    pub job_location: Option<String>,
}

impl From<UpdateJobRequest> for UpdateJobCommand {
    fn from(request: UpdateJobRequest) -> Self {
        Self {
            company: request.company,
            position: request.position,
            job_location: request.job_location,
            status: request.status,
            job_type: request.job_type,
        }
    }
}

/// Query string of `GET /jobs`
///
/// `page` and `limit` are read leniently: anything that is not a positive
/// integer falls back to the default.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobsQuery {
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub sort: Option<String>,
    #[validate(length(max = 100))]
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl From<JobsQuery> for JobSearchParams {
    fn from(query: JobsQuery) -> Self {
        Self {
            status: query.status,
            job_type: query.job_type,
            sort: query.sort,
            search: query.search,
            page: positive_number(query.page.as_deref()),
            limit: positive_number(query.limit.as_deref()),
        }
    }
}

fn positive_number(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse().ok())
        .filter(|value| *value > 0)
}

#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub job: Job,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedJobResponse {
    pub updated_job: Job,
}

#[derive(Debug, Serialize)]
pub struct DeleteJobResponse {
    pub msg: String,
}

impl DeleteJobResponse {
    pub fn removed() -> Self {
        Self {
            msg: "Success! Job removed".to_string(),
        }
    }
}
