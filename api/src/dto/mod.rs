//! Request and response bodies of the HTTP API

pub mod auth_dto;
pub mod job_dto;

pub use auth_dto::{LoginRequest, RegisterRequest, UpdateUserRequest};
pub use job_dto::{
    CreateJobRequest, DeleteJobResponse, JobResponse, JobsQuery, UpdateJobRequest,
    UpdatedJobResponse,
};
