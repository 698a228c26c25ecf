//! Unit tests for the job entity

use uuid::Uuid;

use crate::domain::entities::job::{Job, JobStatus, JobType, DEFAULT_JOB_LOCATION};

#[test]
fn test_new_job_defaults() {
    let owner = Uuid::new_v4();
    let job = Job::new("Acme".to_string(), "Engineer".to_string(), owner);

    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.job_type, JobType::FullTime);
    assert_eq!(job.job_location, DEFAULT_JOB_LOCATION);
    assert!(job.is_owned_by(&owner));
    assert!(!job.is_owned_by(&Uuid::new_v4()));
}

#[test]
fn test_status_parsing() {
    assert_eq!("interview".parse::<JobStatus>().unwrap(), JobStatus::Interview);
    assert_eq!("declined".parse::<JobStatus>().unwrap(), JobStatus::Declined);
    assert_eq!("pending".parse::<JobStatus>().unwrap(), JobStatus::Pending);
    assert!("accepted".parse::<JobStatus>().is_err());
}

#[test]
fn test_job_type_parsing() {
    assert_eq!("full-time".parse::<JobType>().unwrap(), JobType::FullTime);
    assert_eq!("part-time".parse::<JobType>().unwrap(), JobType::PartTime);
    assert_eq!("remote".parse::<JobType>().unwrap(), JobType::Remote);
    assert_eq!("internship".parse::<JobType>().unwrap(), JobType::Internship);
    assert!("contract".parse::<JobType>().is_err());
}

#[test]
fn test_job_serializes_camel_case() {
    let job = Job::new("Acme".to_string(), "Engineer".to_string(), Uuid::new_v4());
    let json = serde_json::to_value(&job).unwrap();

    assert_eq!(json["jobType"], "full-time");
    assert_eq!(json["status"], "pending");
    assert_eq!(json["jobLocation"], "my city");
    assert!(json.get("createdBy").is_some());
    assert!(json.get("createdAt").is_some());
}
