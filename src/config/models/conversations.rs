//! Conversation log configuration

use crate::config::validation::Validate;
use serde::{Deserialize, Serialize};

/// Bounds for the in-memory conversation log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Conversations kept before the least recently used is evicted
    #[serde(default = "default_max_conversations")]
    pub max_conversations: usize,
    /// Replies kept per conversation
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            max_conversations: default_max_conversations(),
            max_messages: default_max_messages(),
        }
    }
}

impl Validate for ConversationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_conversations == 0 {
            return Err("max_conversations must be greater than 0".to_string());
        }
        if self.max_messages == 0 {
            return Err("max_messages must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn default_max_conversations() -> usize {
    1000
}

fn default_max_messages() -> usize {
    50
}
