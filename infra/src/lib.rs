//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Job Tracker
//! backend. It provides the concrete persistence behind the repository
//! traits defined in `jt_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL connection pool, embedded migrations and
//!   repository implementations using SQLx
//! - **Seed**: bulk loading of job fixtures for local development

pub mod database;
pub mod seed;

pub use database::{DatabasePool, MySqlJobRepository, MySqlUserRepository, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed seed data
    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),
}
