//! Configuration models
//!
//! One module per configuration section.

pub mod conversations;
pub mod rate_limit;
pub mod server;
pub mod upstream;

pub use conversations::ConversationConfig;
pub use rate_limit::RateLimitConfig;
pub use server::{CorsConfig, ServerConfig};
pub use upstream::UpstreamConfig;
