use actix_web::{web, HttpResponse};

use jt_core::repositories::{JobRepository, UserRepository};

use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/jobs/stats
///
/// # Response
///
/// ```json
/// {
///     "defaultStats": { "pending": 4, "interview": 2, "declined": 0 },
///     "monthlyApplications": [{ "date": "Mar 2024", "count": 3 }]
/// }
/// ```
pub async fn show_stats<U, J>(state: web::Data<AppState<U, J>>, auth: AuthContext) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
{
    match state.job_service.show_stats(auth.user_id).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(error) => handle_domain_error(&error),
    }
}
