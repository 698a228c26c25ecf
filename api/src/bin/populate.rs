//! Replace every stored job with the contents of a JSON fixture file
//!
//! Usage: `populate [path]` (defaults to `mock-data.json`). Exits with 0 on
//! success and 1 on any failure.

use std::process::ExitCode;

use anyhow::Context;

use jt_api::telemetry::init_tracing;
use jt_infra::{
    seed::{parse_seed_jobs, populate_jobs},
    DatabasePool,
};
use jt_shared::AppConfig;

const DEFAULT_FIXTURE: &str = "mock-data.json";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_FIXTURE.to_string());

    match run(&config, &path).await {
        Ok(count) => {
            tracing::info!(count, path = %path, "Jobs populated");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = ?e, path = %path, "Populate failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &AppConfig, path: &str) -> anyhow::Result<usize> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path))?;
    let jobs = parse_seed_jobs(&raw).context("Invalid fixture file")?;

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    pool.run_migrations()
        .await
        .context("Failed to run database migrations")?;

    let result = populate_jobs(&pool, jobs).await.context("Failed to insert jobs");
    pool.close().await;
    result
}
