//! Type definitions shared between the service and HTTP layers

pub mod pagination;

pub use pagination::{Pagination, DEFAULT_PER_PAGE, MAX_PER_PAGE};
