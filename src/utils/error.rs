//! Error handling for the Gateway
//!
//! This module defines all error types used throughout the gateway and how
//! each one is rendered as an HTTP response.

use actix_web::http::StatusCode;
use actix_web::http::header::RETRY_AFTER;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Message returned to clients whenever the AI backend cannot serve a chat
pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "AI service temporarily unavailable";

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Client input is malformed
    #[error("{0}")]
    Validation(String),

    /// Client exceeded its request window
    #[error("Rate limit exceeded")]
    RateLimit {
        /// Time until the client's window resets
        retry_after: Duration,
    },

    /// The AI backend could not be reached (refused, DNS, timeout)
    #[error("AI service unreachable ({url}): {cause}")]
    UpstreamUnavailable { url: String, cause: String },

    /// The AI backend answered with a non-success status
    #[error("AI service error (status {status}): {body}")]
    UpstreamError { status: u16, body: String },

    /// The AI backend answered with a body we cannot interpret
    #[error("AI service response parsing error: {0}")]
    UpstreamProtocol(String),

    /// No route matched the request
    #[error("Route not found: {path}")]
    NotFound { path: String },

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn rate_limited(retry_after: Duration) -> Self {
        Self::RateLimit { retry_after }
    }

    pub fn upstream_unavailable<U: Into<String>, C: ToString>(url: U, cause: C) -> Self {
        Self::UpstreamUnavailable {
            url: url.into(),
            cause: cause.to_string(),
        }
    }

    pub fn upstream_error<S: Into<String>>(status: u16, body: S) -> Self {
        Self::UpstreamError {
            status,
            body: body.into(),
        }
    }

    pub fn upstream_protocol<S: Into<String>>(message: S) -> Self {
        Self::UpstreamProtocol(message.into())
    }

    pub fn not_found<S: Into<String>>(path: S) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error came from the AI backend rather than the client
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable { .. } | Self::UpstreamError { .. } | Self::UpstreamProtocol(_)
        )
    }
}

/// Whole seconds a client should wait, never zero for a rejected request
pub fn retry_after_seconds(retry_after: Duration) -> u64 {
    let secs = retry_after.as_secs();
    if retry_after.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs.max(1)
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::RateLimit { .. } => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::UpstreamUnavailable { .. }
            | GatewayError::UpstreamError { .. }
            | GatewayError::UpstreamProtocol(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::NotFound { .. } => StatusCode::NOT_FOUND,
            GatewayError::Config(_) | GatewayError::Io(_) | GatewayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            GatewayError::Validation(message) => {
                HttpResponse::build(status).json(json!({ "error": message }))
            }
            GatewayError::RateLimit { retry_after } => {
                let seconds = retry_after_seconds(*retry_after);
                HttpResponse::build(status)
                    .insert_header((RETRY_AFTER, seconds.to_string()))
                    .json(json!({
                        "error": "Rate limit exceeded",
                        "retryAfterSeconds": seconds,
                        "retry_after": seconds,
                    }))
            }
            GatewayError::UpstreamUnavailable { .. }
            | GatewayError::UpstreamError { .. }
            | GatewayError::UpstreamProtocol(_) => HttpResponse::build(status).json(json!({
                "error": UPSTREAM_UNAVAILABLE_MESSAGE,
                "message": self.to_string(),
            })),
            GatewayError::NotFound { path } => HttpResponse::build(status).json(json!({
                "error": "Route not found",
                "path": path,
            })),
            _ => HttpResponse::build(status).json(json!({
                "error": "An internal error occurred",
            })),
        }
    }
}
