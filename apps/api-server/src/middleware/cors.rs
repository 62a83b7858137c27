//! CORS policy for the browser frontend.

use actix_cors::Cors;
use actix_web::http::{Method, header};

/// Allow a single frontend origin to call the posts endpoints.
pub fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods([Method::GET, Method::POST, Method::DELETE])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::HeaderName::from_static("x-request-id")])
        .max_age(3600)
}
