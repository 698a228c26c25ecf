use actix_web::{web, HttpResponse};
use validator::Validate;

use jt_core::repositories::{JobRepository, UserRepository};

use crate::dto::LoginRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Returns the same body as registration with 200 OK. An unknown email and
/// a wrong password both produce `401 Authentication invalid`.
pub async fn login<U, J>(
    state: web::Data<AppState<U, J>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.auth_service.login(request.into()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
