//! Shared utilities and common types for the Job Tracker server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Pagination helpers

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LogFormat,
    LoggingConfig, PasswordConfig, ServerConfig, MAX_LIFETIME_DAYS,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{Pagination, DEFAULT_PER_PAGE, MAX_PER_PAGE};
