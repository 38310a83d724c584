//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::Gateway;
use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        config.validate()?;
        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("🚀 Starting Xionco gateway");

    let gateway = Gateway::new(Config::load().await?)?;
    let config = gateway.config();

    info!(
        "🌐 Server starting at: http://{}",
        config.server().address()
    );
    info!("📍 AI service URL: {}", config.upstream().chat_url());
    if config.rate_limit().enabled {
        info!(
            "✅ Rate limiting: {} requests per {} seconds per IP",
            config.rate_limit().max_requests,
            config.rate_limit().window_secs
        );
    } else {
        info!("⚠️  Rate limiting disabled");
    }
    info!("📋 API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/v1/chat - Chat with the assistant (rate limited)");
    info!("   GET  /api/v1/products/search - Product search");
    info!("   GET  /api/v1/recommendations - Product recommendations");
    info!("   GET  /api/v1/conversations/{{id}} - Conversation history");
    info!("   GET  /api/v1/stats - Gateway statistics");

    gateway.run().await
}
