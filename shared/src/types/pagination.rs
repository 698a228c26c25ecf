//! Page/limit pagination for list endpoints

use serde::{Deserialize, Serialize};

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Create a new pagination, coercing out-of-range values into bounds
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE),
        }
    }

    /// Build from optional query values
    ///
    /// A missing or zero value falls back to the default.
    pub fn from_query(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self::new(
            page.filter(|page| *page > 0).unwrap_or(DEFAULT_PAGE),
            per_page.filter(|per_page| *per_page > 0).unwrap_or(DEFAULT_PER_PAGE),
        )
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// Number of pages needed to hold `total` items
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.per_page))
    }
}

const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;
const MIN_PER_PAGE: u32 = 1;
pub const MAX_PER_PAGE: u32 = 100;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let pagination = Pagination::from_query(None, None);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit(), 10);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn test_zero_query_values_use_defaults() {
        let pagination = Pagination::from_query(Some(0), Some(0));
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit(), DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Pagination::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_out_of_range_values_are_coerced() {
        let pagination = Pagination::new(0, 0);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 1);
        assert_eq!(Pagination::new(1, 10_000).per_page, MAX_PER_PAGE);
    }

    #[test]
    fn test_total_pages() {
        let pagination = Pagination::new(1, 10);
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(pagination.total_pages(10), 1);
        assert_eq!(pagination.total_pages(11), 2);
    }
}
