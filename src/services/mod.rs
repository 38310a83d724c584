//! Services module
//!
//! Data behind the non-chat endpoints: the static catalog, the in-memory
//! conversation log and live gateway counters.

pub mod catalog;
pub mod conversations;
pub mod stats;

pub use catalog::{Catalog, ProductInfo, RecommendationQuery, SearchQuery};
pub use conversations::ConversationLog;
pub use stats::{GatewayStats, StatsSnapshot};
