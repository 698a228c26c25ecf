//! Application factory
//!
//! Builds the actix-web [`App`] with middleware, extractor configuration and
//! every route of the API. Used by the server binary and by the integration
//! tests with in-memory repositories.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Condition,
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use jt_core::repositories::{JobRepository, UserRepository};
use jt_infra::DatabasePool;
use jt_shared::AppConfig;

use crate::handlers::error::{
    json_error_handler, not_found, path_error_handler, query_error_handler,
};
use crate::middleware::{auth::JwtAuth, cors::create_cors, security::SecurityMiddleware};
use crate::routes::{auth, jobs, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, J>(
    app_state: web::Data<AppState<U, J>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
{
    let jwt_auth = JwtAuth::new(app_state.token_service.clone());

    App::new()
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(config.server.max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Middleware order: the last `wrap` sees the request first
        .wrap(SecurityMiddleware::new(config.environment))
        .wrap(create_cors(&config.cors))
        .wrap(Condition::new(
            config.environment.logs_requests(),
            TracingLogger::default(),
        ))
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(health_check))
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, J>))
                        .route("/login", web::post().to(auth::login::<U, J>))
                        .service(
                            web::resource("/updateUser")
                                .wrap(jwt_auth.clone())
                                .route(web::patch().to(auth::update_user::<U, J>)),
                        ),
                )
                .service(
                    web::scope("/jobs")
                        .wrap(jwt_auth)
                        .route("", web::post().to(jobs::create_job::<U, J>))
                        .route("", web::get().to(jobs::get_all_jobs::<U, J>))
                        .route("/stats", web::get().to(jobs::show_stats::<U, J>))
                        .route("/{id}", web::patch().to(jobs::update_job::<U, J>))
                        .route("/{id}", web::delete().to(jobs::delete_job::<U, J>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
///
/// Reports the database as well when a pool is registered.
async fn health_check(pool: Option<web::Data<DatabasePool>>) -> HttpResponse {
    let database = match pool {
        Some(pool) => match pool.health_check().await {
            Ok(true) => {
                tracing::debug!(stats = %pool.get_statistics(), "Database healthy");
                Some("up")
            }
            _ => Some("down"),
        },
        None => None,
    };

    let body = serde_json::json!({
        "status": if database == Some("down") { "degraded" } else { "healthy" },
        "service": "job-tracker-api",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if database == Some("down") {
        HttpResponse::ServiceUnavailable().json(body)
    } else {
        HttpResponse::Ok().json(body)
    }
}
