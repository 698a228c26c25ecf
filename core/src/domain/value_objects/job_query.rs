//! Search parameters and paged results for job listings.

use serde::Serialize;
use std::str::FromStr;
use uuid::Uuid;

use jt_shared::Pagination;

use crate::domain::entities::job::{Job, JobStatus, JobType};

/// Sort order for job listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobSort {
    /// Newest first
    #[default]
    Latest,
    /// Oldest first
    Oldest,
    /// Position ascending
    AToZ,
    /// Position descending
    ZToA,
}

impl FromStr for JobSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(JobSort::Latest),
            "oldest" => Ok(JobSort::Oldest),
            "a-z" => Ok(JobSort::AToZ),
            "z-a" => Ok(JobSort::ZToA),
            _ => Err(format!("Invalid sort: {}", s)),
        }
    }
}

/// Filter value that may be the wildcard `all`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobFilter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: FromStr> FromStr for JobFilter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(JobFilter::All)
        } else {
            s.parse().map(JobFilter::Only)
        }
    }
}

impl<T: PartialEq> JobFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            JobFilter::All => true,
            JobFilter::Only(expected) => expected == value,
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            JobFilter::All => None,
            JobFilter::Only(value) => Some(value),
        }
    }
}

/// Fully resolved job search for one owner
#[derive(Debug, Clone)]
pub struct JobQuery {
    /// Only jobs created by this user are visible
    pub owner: Uuid,
    pub status: JobFilter<JobStatus>,
    pub job_type: JobFilter<JobType>,
    /// Case-insensitive substring of the position
    pub search: Option<String>,
    pub sort: JobSort,
    pub pagination: Pagination,
}

impl JobQuery {
    /// Query returning the first page of all jobs for `owner`
    pub fn for_owner(owner: Uuid) -> Self {
        Self {
            owner,
            status: JobFilter::All,
            job_type: JobFilter::All,
            search: None,
            sort: JobSort::default(),
            pagination: Pagination::default(),
        }
    }

    /// Whether `job` satisfies every filter of this query, ignoring paging
    pub fn matches(&self, job: &Job) -> bool {
        job.created_by == self.owner
            && self.status.matches(&job.status)
            && self.job_type.matches(&job.job_type)
            && self.search.as_ref().map_or(true, |needle| {
                job.position.to_lowercase().contains(&needle.to_lowercase())
            })
    }
}

/// One page of jobs plus totals
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsPage {
    pub jobs: Vec<Job>,
    pub total_jobs: u64,
    pub num_of_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_parsing() {
        assert_eq!("latest".parse::<JobSort>().unwrap(), JobSort::Latest);
        assert_eq!("oldest".parse::<JobSort>().unwrap(), JobSort::Oldest);
        assert_eq!("a-z".parse::<JobSort>().unwrap(), JobSort::AToZ);
        assert_eq!("z-a".parse::<JobSort>().unwrap(), JobSort::ZToA);
        assert!("newest".parse::<JobSort>().is_err());
    }

    #[test]
    fn test_filter_all_is_wildcard() {
        let filter: JobFilter<JobStatus> = "all".parse().unwrap();
        assert!(filter.matches(&JobStatus::Declined));
        assert!(filter.as_option().is_none());

        let filter: JobFilter<JobStatus> = "declined".parse().unwrap();
        assert!(filter.matches(&JobStatus::Declined));
        assert!(!filter.matches(&JobStatus::Pending));

        assert!("bogus".parse::<JobFilter<JobStatus>>().is_err());
    }

    #[test]
    fn test_query_matches_search_case_insensitively() {
        let owner = Uuid::new_v4();
        let job = Job::new("Acme".to_string(), "Senior Rust Engineer".to_string(), owner);

        let mut query = JobQuery::for_owner(owner);
        query.search = Some("rust".to_string());
        assert!(query.matches(&job));

        query.search = Some("python".to_string());
        assert!(!query.matches(&job));

        let other = JobQuery::for_owner(Uuid::new_v4());
        assert!(!other.matches(&job));
    }
}
