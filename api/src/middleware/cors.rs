//! CORS middleware configuration for cross-origin requests.
//!
//! Origins, methods and headers come from [`CorsConfig`]; an origin list
//! containing `*` allows any origin.

use actix_cors::Cors;
use actix_web::http::{header::HeaderName, Method};

use jt_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        // actix-cors defaults reject every cross-origin request
        return Cors::default();
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();

    let mut cors = Cors::default()
        .allowed_methods(methods)
        .allowed_headers(headers)
        .max_age(config.max_age as usize);

    if config.allows_any_origin() {
        tracing::info!("CORS allows any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            tracing::info!(origin = %origin, "Adding allowed origin");
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
