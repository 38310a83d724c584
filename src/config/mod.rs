//! Configuration management for the Gateway
//!
//! Configuration is layered: built-in defaults, then an optional YAML file,
//! then environment variables.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Default location of the YAML configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Environment variable naming an alternative configuration file
pub const CONFIG_PATH_ENV: &str = "GATEWAY_CONFIG";

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub conversations: ConversationConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from defaults and environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file named by `GATEWAY_CONFIG` (or the default path) when it
    /// exists, then apply environment overrides
    pub async fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());

        let mut config = if Path::new(&path).exists() {
            Self::from_file(&path).await?
        } else {
            info!("No configuration file at {}, using defaults", path);
            Self::default()
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` to resolve variable names
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = lookup("PYTHON_SERVICE_URL") {
            self.upstream.base_url = url;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("FIBER_PORT").or_else(|| lookup("PORT")) {
            self.server.port = parse_env("port", &port)?;
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            self.server.cors.allowed_origins = CorsConfig::parse_origins(&origins);
        }
        if let Some(max) = lookup("RATE_LIMIT_MAX_REQUESTS") {
            self.rate_limit.max_requests = parse_env("RATE_LIMIT_MAX_REQUESTS", &max)?;
        }
        if let Some(window) = lookup("RATE_LIMIT_WINDOW_SECS") {
            self.rate_limit.window_secs = parse_env("RATE_LIMIT_WINDOW_SECS", &window)?;
        }
        if let Some(timeout) = lookup("UPSTREAM_TIMEOUT_SECS") {
            self.upstream.timeout_secs = parse_env("UPSTREAM_TIMEOUT_SECS", &timeout)?;
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get upstream configuration
    pub fn upstream(&self) -> &UpstreamConfig {
        &self.upstream
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.rate_limit
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.upstream
            .validate()
            .map_err(|e| GatewayError::Config(format!("Upstream config error: {}", e)))?;

        self.rate_limit
            .validate()
            .map_err(|e| GatewayError::Config(format!("Rate limit config error: {}", e)))?;

        self.conversations
            .validate()
            .map_err(|e| GatewayError::Config(format!("Conversation config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| GatewayError::Config(format!("Invalid value for {}: '{}'", name, value)))
}
