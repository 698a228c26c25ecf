//! Conversion of domain and request errors into JSON error responses.
//!
//! Every failure leaves the API as the shared [`ErrorResponse`] envelope:
//!
//! ```json
//! { "error": "VALIDATION_ERROR", "message": "Please provide email",
//!   "details": { "field": "email" }, "timestamp": "..." }
//! ```

use std::fmt;

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};

use jt_core::errors::{AuthError, DomainError};
use jt_shared::{error_codes, ErrorResponse};

/// Message returned for every server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong, try again later";

/// Status code and error code for a domain error
fn classify(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::ValidationErr(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::Auth(AuthError::EmailAlreadyInUse) => {
            (StatusCode::CONFLICT, error_codes::CONFLICT)
        }
        DomainError::Auth(AuthError::AuthenticationFailed) => {
            (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED)
        }
        DomainError::Auth(AuthError::InsufficientPermissions) => {
            (StatusCode::FORBIDDEN, error_codes::FORBIDDEN)
        }
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        DomainError::Internal { .. } | DomainError::Database(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code) = classify(error);

    let body = match error {
        DomainError::ValidationErr(validation) => {
            ErrorResponse::new(code, validation.to_string()).add_detail("field", validation.field())
        }
        _ if error.is_internal() => {
            tracing::error!(error = %error, "Request failed with an internal error");
            ErrorResponse::new(code, INTERNAL_ERROR_MESSAGE)
        }
        _ => ErrorResponse::new(code, error.to_string()),
    };

    HttpResponse::build(status).json(body)
}

/// Render edge validation failures from `validator`
///
/// Reports the alphabetically first offending field so the response is
/// stable across runs.
pub fn handle_validation_errors(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let Some((field, field_errors)) = fields.into_iter().next() else {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            error_codes::VALIDATION_ERROR,
            "Invalid request",
        ));
    };

    let field = to_camel_case(&field);
    let max = field_errors
        .iter()
        .find_map(|e| e.params.get("max").cloned());

    let message = match max {
        Some(max) => format!("{} must be at most {} characters", field, max),
        None => format!("Invalid value for {}", field),
    };

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, message).add_detail("field", field),
    )
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Domain error carried through actix's error channel
///
/// Middleware and extractors cannot return an `HttpResponse` directly; they
/// return this and actix renders it with [`handle_domain_error`].
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        classify(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        Self(DomainError::Auth(error))
    }
}

/// Malformed or oversized JSON bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let status = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    tracing::debug!(error = %err, "Rejected JSON payload");

    let response = HttpResponse::build(status)
        .json(ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string()));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Unparseable query strings, e.g. a non-numeric `page`
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string()));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Unparseable path segments
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::NotFound()
        .json(ErrorResponse::new(error_codes::NOT_FOUND, err.to_string()));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "Route does not exist",
    ))
}
