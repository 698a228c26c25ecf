use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;

use jt_api::{create_app, telemetry::init_tracing, AppState};
use jt_core::services::{AuthService, JobService, PasswordHasher, TokenService, TokenServiceConfig};
use jt_infra::{DatabasePool, MySqlJobRepository, MySqlUserRepository};
use jt_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment still applies
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;

    tracing::info!(
        environment = %config.environment,
        bind_address = %config.server.bind_address(),
        "Starting Job Tracker API"
    );

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    pool.run_migrations()
        .await
        .context("Failed to run database migrations")?;

    let token_service = Arc::new(
        TokenService::new(TokenServiceConfig::from(&config.auth.jwt))
            .context("Failed to create token service")?,
    );
    let password_hasher = PasswordHasher::from_config(&config.auth.password);

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let job_repository = Arc::new(MySqlJobRepository::new(pool.get_pool().clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&token_service),
        password_hasher,
    ));
    let job_service = Arc::new(JobService::new(job_repository));

    let state = web::Data::new(AppState::new(auth_service, job_service, token_service));
    let pool_data = web::Data::new(pool.clone());
    let app_config = config.clone();

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), &app_config).app_data(pool_data.clone())
    })
    .keep_alive(Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(config.server.bind_address())
        .with_context(|| format!("Failed to bind {}", config.server.bind_address()))?
        .run()
        .await
        .context("Server error")?;

    pool.close().await;
    tracing::info!("Job Tracker API stopped");

    Ok(())
}
