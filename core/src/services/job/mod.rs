//! Job resource service module
//!
//! CRUD, search and statistics over the requesting user's job applications.
//! Mutations of a specific job always run the ownership guard first.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::JobService;
pub use types::{CreateJobCommand, JobSearchParams, UpdateJobCommand};
