//! Test fixtures
//!
//! A mock AI service answering on `/api/v1/chat`, plus config helpers
//! pointing at it.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xionco_gateway::config::UpstreamConfig;

/// Mock AI service with a single chat route
pub struct MockAiService {
    pub server: MockServer,
}

impl MockAiService {
    /// Start a service that answers every chat with `reply`
    pub async fn replying(reply: Value) -> Self {
        Self::with_template(ResponseTemplate::new(200).set_body_json(reply)).await
    }

    /// Start a service that answers with a canned successful reply
    pub async fn healthy() -> Self {
        Self::replying(default_reply()).await
    }

    /// Start a service that answers every chat with `template`
    pub async fn with_template(template: ResponseTemplate) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/chat"))
            .respond_with(template)
            .mount(&server)
            .await;
        Self { server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Number of chat requests the service has received
    pub async fn received(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

/// A reply shaped like the AI service's
pub fn default_reply() -> Value {
    json!({
        "message": "Kursi ini cocok untuk kerja lama.",
        "provider": "deepseek",
        "confidence": 0.9,
        "related_products": [2]
    })
}

/// Upstream config pointing at `base_url` with a short timeout
pub fn upstream_config(base_url: String) -> UpstreamConfig {
    UpstreamConfig {
        base_url,
        timeout_secs: 2,
        ..UpstreamConfig::default()
    }
}
