use actix_web::{web, HttpResponse};
use validator::Validate;

use jt_core::repositories::{JobRepository, UserRepository};

use crate::dto::{UpdateJobRequest, UpdatedJobResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use super::parse_job_id;

/// Handler for PATCH /api/v1/jobs/{id}
///
/// `company`, `position` and `jobLocation` are required; `status` and
/// `jobType` are optional.
///
/// ## Errors
/// - 400 Bad Request: Missing or invalid field
/// - 403 Forbidden: The job belongs to another user
/// - 404 Not Found: No job with that id
pub async fn update_job<U, J>(
    state: web::Data<AppState<U, J>>,
    auth: AuthContext,
    path: web::Path<String>,
    request: web::Json<UpdateJobRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    let job_id = match parse_job_id(&path) {
        Ok(id) => id,
        Err(error) => return handle_domain_error(&error),
    };

    match state
        .job_service
        .update_job(auth.user_id, job_id, request.into())
        .await
    {
        Ok(updated_job) => HttpResponse::Ok().json(UpdatedJobResponse { updated_job }),
        Err(error) => handle_domain_error(&error),
    }
}
