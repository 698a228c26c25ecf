use actix_web::{web, HttpResponse};

use jt_core::repositories::{JobRepository, UserRepository};

use crate::dto::DeleteJobResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use super::parse_job_id;

/// Handler for DELETE /api/v1/jobs/{id}
///
/// Responds `{ "msg": "Success! Job removed" }`; 403 when the job belongs to
/// another user and 404 when it does not exist.
pub async fn delete_job<U, J>(
    state: web::Data<AppState<U, J>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
{
    let result = match parse_job_id(&path) {
        Ok(job_id) => state.job_service.delete_job(auth.user_id, job_id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(()) => HttpResponse::Ok().json(DeleteJobResponse::removed()),
        Err(error) => handle_domain_error(&error),
    }
}
