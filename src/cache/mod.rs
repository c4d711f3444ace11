//! Cache Module
//!
//! Provides bounded in-memory caching with lazy TTL expiration and
//! oldest-inserted eviction.

mod entry;
mod order;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::TtlCache;
