//! Health check endpoint

use actix_web::HttpResponse;
use serde::Serialize;
use tracing::debug;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "xionco-furniture-api";

/// Health check response body
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    /// Unix seconds
    pub timestamp: u64,
    pub service: &'static str,
    pub version: &'static str,
}

/// Basic health check endpoint
///
/// Reports liveness only; the AI service is not probed.
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");

    HttpResponse::Ok().json(HealthStatus {
        status: "healthy",
        timestamp: crate::utils::current_timestamp(),
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}
