//! AI backend (upstream) configuration

use crate::config::validation::Validate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where and how chat messages are forwarded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the AI service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the chat endpoint on the AI service
    #[serde(default = "default_chat_path")]
    pub chat_path: String,
    /// Request timeout in seconds; generation is slow, so this is generous
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            chat_path: default_chat_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    /// Full URL of the upstream chat endpoint
    pub fn chat_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.chat_path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for UpstreamConfig {
    fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "Upstream base URL must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }
        if self.timeout_secs == 0 {
            return Err("Upstream timeout cannot be 0".to_string());
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_chat_path() -> String {
    "/api/v1/chat".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}
