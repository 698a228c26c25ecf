//! In-memory implementation of JobRepository for tests and local runs

use async_trait::async_trait;
use chrono::Datelike;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::job::{Job, JobStatus};
use crate::domain::value_objects::{JobQuery, JobSort, MonthlyCount};
use crate::errors::DomainError;

use super::trait_::JobRepository;

/// Mock job repository backed by a `HashMap`
#[derive(Clone, Default)]
pub struct MockJobRepository {
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl MockJobRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a job as-is, keeping its timestamps
    pub async fn insert(&self, job: Job) {
        self.jobs.write().await.insert(job.id, job);
    }

    fn matching(jobs: &HashMap<Uuid, Job>, query: &JobQuery) -> Vec<Job> {
        let mut matched: Vec<Job> = jobs.values().filter(|j| query.matches(j)).cloned().collect();
        match query.sort {
            JobSort::Latest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            JobSort::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            JobSort::AToZ => matched.sort_by(|a, b| a.position.cmp(&b.position)),
            JobSort::ZToA => matched.sort_by(|a, b| b.position.cmp(&a.position)),
        }
        matched
    }
}

#[async_trait]
impl JobRepository for MockJobRepository {
    async fn create(&self, job: Job) -> Result<Job, DomainError> {
        let mut jobs = self.jobs.write().await;
        jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).cloned())
    }

    async fn update(&self, job: Job) -> Result<Job, DomainError> {
        let mut jobs = self.jobs.write().await;

        if !jobs.contains_key(&job.id) {
            return Err(DomainError::job_not_found(job.id));
        }

        jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs.remove(&id).is_some())
    }

    async fn find(&self, query: &JobQuery) -> Result<Vec<Job>, DomainError> {
        let jobs = self.jobs.read().await;
        let offset = usize::try_from(query.pagination.offset()).unwrap_or(usize::MAX);
        Ok(Self::matching(&jobs, query)
            .into_iter()
            .skip(offset)
            .take(query.pagination.limit() as usize)
            .collect())
    }

    async fn count(&self, query: &JobQuery) -> Result<u64, DomainError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.values().filter(|j| query.matches(j)).count() as u64)
    }

    async fn count_by_status(&self, owner: Uuid) -> Result<Vec<(JobStatus, u64)>, DomainError> {
        let jobs = self.jobs.read().await;
        let mut counts: HashMap<JobStatus, u64> = HashMap::new();
        for job in jobs.values().filter(|j| j.is_owned_by(&owner)) {
            *counts.entry(job.status).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn monthly_counts(
        &self,
        owner: Uuid,
        limit: usize,
    ) -> Result<Vec<MonthlyCount>, DomainError> {
        let jobs = self.jobs.read().await;
        let mut months: BTreeMap<(i32, u32), u64> = BTreeMap::new();
        for job in jobs.values().filter(|j| j.is_owned_by(&owner)) {
            *months
                .entry((job.created_at.year(), job.created_at.month()))
                .or_default() += 1;
        }
        Ok(months
            .into_iter()
            .rev()
            .take(limit)
            .map(|((year, month), count)| MonthlyCount { year, month, count })
            .collect())
    }
}
