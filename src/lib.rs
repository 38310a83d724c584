//! # Xionco Gateway
//!
//! HTTP gateway in front of the Xionco furniture assistant's AI service.
//!
//! ## Features
//!
//! - **Rate Limiting**: Fixed-window limit per client IP on the chat endpoint
//! - **Chat Forwarding**: Validates chat messages and relays them to the AI service
//! - **Catalog Endpoints**: Product search and budget-based recommendations
//! - **Conversation Log**: Bounded in-memory history per conversation id
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use xionco_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::chat::{ChatForwarder, ChatRequest, ChatResponse};
pub use core::rate_limiter::{RateLimitDecision, RateLimiter};

use tracing::{debug, info};

/// The gateway: configuration plus the HTTP server built from it
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::builder::ServerBuilder::new()
            .with_config(config.clone())
            .build()?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        debug!("Configuration: {:#?}", self.config);

        self.server.start().await
    }

    /// Configuration the gateway was built with
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
