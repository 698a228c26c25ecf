use actix_web::{web, HttpResponse};
use validator::Validate;

use jt_core::repositories::{JobRepository, UserRepository};

use crate::dto::{CreateJobRequest, JobResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for POST /api/v1/jobs
///
/// # Request Body
///
/// ```json
/// { "company": "Acme", "position": "Engineer",
///   "status": "pending", "jobType": "remote", "jobLocation": "Oslo" }
/// ```
///
/// `company` and `position` are required. Responds 201 with `{ "job": {...} }`.
pub async fn create_job<U, J>(
    state: web::Data<AppState<U, J>>,
    auth: AuthContext,
    request: web::Json<CreateJobRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.job_service.create_job(auth.user_id, request.into()).await {
        Ok(job) => HttpResponse::Created().json(JobResponse { job }),
        Err(error) => handle_domain_error(&error),
    }
}
