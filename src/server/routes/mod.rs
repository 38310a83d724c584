//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod chat;
pub mod conversations;
pub mod health;
pub mod products;
pub mod stats;

use crate::core::rate_limiter::RateLimiter;
use crate::server::middleware::RateLimitMiddleware;
use crate::utils::error::GatewayError;
use actix_web::{HttpRequest, web};
use std::sync::Arc;
use tracing::{debug, warn};

/// Configure the `/api/v1` routes; only chat is rate limited
pub fn configure_routes(cfg: &mut web::ServiceConfig, limiter: Arc<RateLimiter>) {
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::resource("/chat")
                    .wrap(RateLimitMiddleware::new(limiter))
                    .route(web::post().to(chat::chat)),
            )
            .route("/products/search", web::get().to(products::search))
            .route("/recommendations", web::get().to(products::recommendations))
            .route(
                "/conversations/{id}",
                web::get().to(conversations::conversation_history),
            )
            .route("/stats", web::get().to(stats::stats)),
    );
}

/// JSON body settings; malformed bodies become validation errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, req| {
            warn!(path = req.path(), "Rejected chat body: {}", err);
            GatewayError::validation("Invalid request format").into()
        })
}

/// Fallback for unmatched routes
pub async fn not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, GatewayError> {
    debug!("No route for {} {}", req.method(), req.path());
    Err(GatewayError::not_found(req.path()))
}
