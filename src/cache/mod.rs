//! Cache Module
//!
//! Provides the in-memory lookup cache with TTL staleness and lazy,
//! read-time eviction.

mod entry;
mod key;
mod stats;
mod store;

// Re-export public types
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::ResultCache;
