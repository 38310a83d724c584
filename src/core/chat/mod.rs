//! Chat forwarding
//!
//! Validates inbound chat messages, relays them to the AI service over HTTP
//! and maps the reply (or failure) onto the gateway's response contract.

mod forwarder;
mod types;


pub use forwarder::{ChatForwarder, validate};
pub use types::{ChatRequest, ChatResponse, UpstreamChatPayload, UpstreamChatReply};
