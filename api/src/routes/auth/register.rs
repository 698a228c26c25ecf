use actix_web::{web, HttpResponse};
use validator::Validate;

use jt_core::repositories::{JobRepository, UserRepository};

use crate::dto::RegisterRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/register
///
/// # Request Body
///
/// ```json
/// { "name": "Ana", "email": "ana@example.com", "password": "secret1" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "user": { "id": "...", "name": "Ana", "email": "ana@example.com",
///               "lastName": "lastName", "location": "my city" },
///     "token": "eyJ...",
///     "location": "my city"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or invalid field
/// - 409 Conflict: Email already in use
pub async fn register<U, J>(
    state: web::Data<AppState<U, J>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.auth_service.register(request.into()).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
