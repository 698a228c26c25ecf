use actix_web::{web, HttpResponse};
use validator::Validate;

use jt_core::repositories::{JobRepository, UserRepository};

use crate::dto::UpdateUserRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for PATCH /api/v1/auth/updateUser
///
/// # Request Headers
///
/// ```text
/// Authorization: Bearer {token}
/// ```
///
/// # Request Body
///
/// ```json
/// { "email": "ana@example.com", "name": "Ana", "lastName": "Silva", "location": "Lisbon" }
/// ```
///
/// All four fields are required. Responds with a fresh token because the
/// name embedded in the old one may be stale.
///
/// ## Errors
/// - 400 Bad Request: Missing or invalid field
/// - 401 Unauthorized: Missing or invalid token
/// - 404 Not Found: The authenticated user no longer exists
/// - 409 Conflict: New email already in use
pub async fn update_user<U, J>(
    state: web::Data<AppState<U, J>>,
    auth: AuthContext,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    J: JobRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.auth_service.update_user(auth.user_id, request.into()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
