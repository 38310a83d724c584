//! HTTP middleware implementations
//!
//! - Per-client rate limiting (chat endpoint)
//! - Security headers

mod rate_limit;
mod security;

pub use rate_limit::{
    RateLimitMiddleware, RateLimitMiddlewareService, UNKNOWN_CLIENT, client_identifier,
};
pub use security::{SecurityHeadersMiddleware, SecurityHeadersMiddlewareService};
