//! Core gateway components
//!
//! - **rate_limiter**: per-client admission control
//! - **chat**: forwarding of chat messages to the AI service

pub mod chat;
pub mod rate_limiter;
