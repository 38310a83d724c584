//! Chat request/response contract

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inbound chat message from a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message; must be non-empty after trimming
    #[serde(default)]
    pub message: String,
    /// Product the user is asking about
    #[serde(default, alias = "productId", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(default, alias = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, alias = "conversationId", skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_product(mut self, product_id: i64) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn with_user<S: Into<String>>(mut self, user_id: S) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_conversation<S: Into<String>>(mut self, conversation_id: S) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }
}

/// Body sent to the AI service; absent fields stay absent
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamChatPayload<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<&'a str>,
}

impl<'a> From<&'a ChatRequest> for UpstreamChatPayload<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            message: &request.message,
            product_id: request.product_id,
            user_id: request.user_id.as_deref(),
            conversation_id: request.conversation_id.as_deref(),
        }
    }
}

/// Body returned by the AI service
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamChatReply {
    pub message: String,
    pub provider: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub related_products: Option<Vec<i64>>,
}

/// Normalized chat reply returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Unique per response (`msg_<nanoseconds>`)
    pub id: String,
    pub message: String,
    /// Model/provider that produced the reply
    pub provider: String,
    pub timestamp: DateTime<Utc>,
    /// Upstream-reported confidence, copied through unchanged
    pub confidence: f64,
    pub related_products: Vec<i64>,
}
