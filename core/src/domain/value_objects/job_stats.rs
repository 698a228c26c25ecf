//! Aggregated application statistics.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::job::JobStatus;

/// Number of most recent months reported in `monthlyApplications`
pub const MONTHS_IN_STATS: usize = 6;

/// Job count for one calendar month, as produced by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyCount {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    pub count: u64,
}

/// Per-status totals, zero when a status has no jobs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: u64,
    pub interview: u64,
    pub declined: u64,
}

impl StatusCounts {
    /// Folds `(status, count)` rows into totals
    pub fn from_rows(rows: &[(JobStatus, u64)]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, (status, count)| {
            match status {
                JobStatus::Pending => acc.pending += count,
                JobStatus::Interview => acc.interview += count,
                JobStatus::Declined => acc.declined += count,
            }
            acc
        })
    }
}

/// One entry of the monthly chart, e.g. `{ "date": "Aug 2024", "count": 3 }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyApplication {
    pub date: String,
    pub count: u64,
}

impl MonthlyApplication {
    /// Labels a month as `Mon YYYY`; `None` for an impossible month
    pub fn from_count(count: &MonthlyCount) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(count.year, count.month, 1)?;
        Some(Self {
            date: date.format("%b %Y").to_string(),
            count: count.count,
        })
    }
}

/// Statistics for the requesting user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub default_stats: StatusCounts,
    /// Oldest month first
    pub monthly_applications: Vec<MonthlyApplication>,
}
