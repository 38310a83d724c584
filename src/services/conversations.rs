//! In-memory conversation history
//!
//! Bounded on both axes: least recently used conversations are evicted, and
//! each conversation keeps only its latest replies. Nothing is persisted.

use crate::config::models::conversations::ConversationConfig;
use crate::core::chat::ChatResponse;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;

pub struct ConversationLog {
    conversations: Mutex<LruCache<String, Vec<ChatResponse>>>,
    max_messages: usize,
}

impl ConversationLog {
    pub fn new(config: &ConversationConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_conversations).unwrap_or(NonZeroUsize::MIN);
        Self {
            conversations: Mutex::new(LruCache::new(capacity)),
            max_messages: config.max_messages.max(1),
        }
    }

    /// Append a reply to a conversation, trimming the oldest beyond the cap
    pub fn record(&self, conversation_id: &str, reply: ChatResponse) {
        let mut conversations = self.conversations.lock();
        let messages = conversations.get_or_insert_mut(conversation_id.to_string(), Vec::new);
        messages.push(reply);
        if messages.len() > self.max_messages {
            let excess = messages.len() - self.max_messages;
            messages.drain(..excess);
        }
    }

    /// Replies recorded for a conversation, oldest first
    pub fn history(&self, conversation_id: &str) -> Vec<ChatResponse> {
        self.conversations
            .lock()
            .get(conversation_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.conversations.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new(&ConversationConfig::default())
    }
}
