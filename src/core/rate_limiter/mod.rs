//! Rate Limiting Implementation
//!
//! Fixed window, per-client admission control for the chat endpoint.

mod limiter;
mod types;
mod utils;


pub use limiter::RateLimiter;
pub use types::{ClientWindow, RateLimitDecision};
