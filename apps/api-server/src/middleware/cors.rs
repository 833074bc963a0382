//! Cross-origin policy built from the configured allow-list.

use actix_cors::Cors;
use actix_web::http::{Method, header};

/// Only origins in `allowed_origins` get CORS headers. An empty list allows
/// no cross-origin callers at all.
pub fn cors_policy(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
    ])
    .allowed_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
    .supports_credentials()
    .max_age(3600)
}
