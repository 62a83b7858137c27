//! Welcome and health check endpoints.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

/// GET /
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("Hello World!")
}

/// Health check endpoint - returns server and database status.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = database_status(&state).await;

    let response = HealthResponse {
        status: if database == "down" { "degraded" } else { "ok" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(feature = "mysql")]
async fn database_status(state: &AppState) -> &'static str {
    match &state.db {
        Some(pool) => match pool.ping().await {
            Ok(()) => "up",
            Err(e) => {
                tracing::warn!(error = %e, "Database ping failed");
                "down"
            }
        },
        None => "disabled",
    }
}

#[cfg(not(feature = "mysql"))]
async fn database_status(_state: &AppState) -> &'static str {
    "disabled"
}
