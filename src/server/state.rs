//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::chat::ChatForwarder;
use crate::core::rate_limiter::RateLimiter;
use crate::services::{Catalog, ConversationLog, GatewayStats};
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc (or are cheap clones) so every worker
/// sees the same limiter, log and counters.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Per-client limiter guarding the chat endpoint
    pub limiter: Arc<RateLimiter>,
    /// Bridge to the AI service
    pub forwarder: ChatForwarder,
    /// Static product catalog
    pub catalog: Arc<Catalog>,
    /// Recent replies per conversation
    pub conversations: Arc<ConversationLog>,
    /// Live counters
    pub stats: Arc<GatewayStats>,
}

impl AppState {
    /// Create a new AppState from configuration
    pub fn new(config: Config) -> Result<Self> {
        let forwarder = ChatForwarder::new(&config.upstream)?;
        let limiter = RateLimiter::new(config.rate_limit.clone());
        let conversations = ConversationLog::new(&config.conversations);

        Ok(Self {
            config: Arc::new(config),
            limiter: Arc::new(limiter),
            forwarder,
            catalog: Arc::new(Catalog::default()),
            conversations: Arc::new(conversations),
            stats: Arc::new(GatewayStats::new()),
        })
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
