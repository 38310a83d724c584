//! Forwards chat messages to the AI service and normalizes its reply

use super::types::{ChatRequest, ChatResponse, UpstreamChatPayload, UpstreamChatReply};
use crate::config::models::upstream::UpstreamConfig;
use crate::utils::error::{GatewayError, Result};
use crate::utils::generate_message_id;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, info};

/// HTTP bridge to the AI service's chat endpoint
///
/// Holds one pooled client; cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct ChatForwarder {
    client: Client,
    chat_url: String,
    timeout: Duration,
}

impl ChatForwarder {
    /// Create a forwarder for the configured upstream
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let timeout = config.timeout();
        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            chat_url: config.chat_url(),
            timeout,
        })
    }

    /// URL chat messages are posted to
    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate, forward and normalize one chat message
    ///
    /// Every call may yield a different reply for the same input; only the
    /// shape of the result is guaranteed.
    pub async fn handle(&self, request: &ChatRequest) -> Result<ChatResponse> {
        validate(request)?;

        let payload = UpstreamChatPayload::from(request);
        debug!(url = %self.chat_url, "Forwarding chat message to AI service");

        let response = self
            .client
            .post(&self.chat_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GatewayError::upstream_unavailable(&self.chat_url, describe(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::upstream_unavailable(&self.chat_url, describe(&e)))?;

        if !status.is_success() {
            return Err(GatewayError::upstream_error(status.as_u16(), body));
        }

        let reply: UpstreamChatReply = serde_json::from_str(&body)
            .map_err(|e| GatewayError::upstream_protocol(e.to_string()))?;

        info!(
            provider = %reply.provider,
            "Chat processed via {} (confidence: {:.2})",
            reply.provider,
            reply.confidence
        );

        Ok(ChatResponse {
            id: generate_message_id(),
            message: reply.message,
            provider: reply.provider,
            timestamp: chrono::Utc::now(),
            confidence: reply.confidence,
            related_products: reply.related_products.unwrap_or_default(),
        })
    }
}

/// Reject requests whose message is empty after trimming
pub fn validate(request: &ChatRequest) -> Result<()> {
    if request.message.trim().is_empty() {
        return Err(GatewayError::validation("message cannot be empty"));
    }
    Ok(())
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    }
}
