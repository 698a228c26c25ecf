use actix_web::{web, HttpResponse};
use validator::Validate;

use jt_core::repositories::{JobRepository, UserRepository};

use crate::dto::JobsQuery;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/jobs
///
/// # Query Parameters
///
/// - `status`: `interview`, `declined`, `pending` or `all`
/// - `jobType`: `full-time`, `part-time`, `remote`, `internship` or `all`
/// - `sort`: `latest` (default), `oldest`, `a-z`, `z-a`
/// - `search`: case-insensitive substring of the position
/// - `page` (default 1), `limit` (default 10)
///
/// # Response
///
/// ```json
/// { "jobs": [...], "totalJobs": 23, "numOfPages": 3 }
/// ```
pub async fn get_all_jobs<U, J>(
    state: web::Data<AppState<U, J>>,
    auth: AuthContext,
    query: web::Query<JobsQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
{
    let query = query.into_inner();
    if let Err(errors) = query.validate() {
        return handle_validation_errors(&errors);
    }

    match state.job_service.list_jobs(auth.user_id, query.into()).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(&error),
    }
}
