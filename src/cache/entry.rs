//! Cache Entry Module
//!
//! Defines the structure for cached lookup results with staleness checking.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A single cached lookup result.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Normalized payload returned to callers (or the `{"raw": ...}` fallback)
    pub payload: Value,
    /// HTTP status the upstream answered with
    pub upstream_status: u16,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl CacheEntry {
    /// Creates a new cache entry stamped with the current time.
    pub fn new(payload: Value, upstream_status: u16) -> Self {
        Self {
            payload,
            upstream_status,
            created_at: current_timestamp_ms(),
        }
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is stale once its age is greater than or
    /// equal to the TTL, so a TTL of zero makes every entry stale on read
    /// (effectively disabling the cache).
    pub fn is_stale(&self, ttl_secs: u64) -> bool {
        let age_ms = current_timestamp_ms().saturating_sub(self.created_at);
        age_ms >= ttl_secs * 1000
    }

    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.created_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_fresh_entry_is_not_stale() {
        let entry = CacheEntry::new(json!({"redg_no": "12345"}), 200);
        assert!(!entry.is_stale(300));
    }

    #[test]
    fn test_entry_becomes_stale_after_ttl() {
        let entry = CacheEntry::new(json!({"raw": "<html></html>"}), 200);

        sleep(Duration::from_millis(1100));

        assert!(entry.is_stale(1));
    }

    #[test]
    fn test_zero_ttl_is_always_stale() {
        let entry = CacheEntry::new(json!({}), 200);
        assert!(entry.is_stale(0));
    }

    #[test]
    fn test_age_increases() {
        let entry = CacheEntry::new(json!({}), 200);
        sleep(Duration::from_millis(50));
        assert!(entry.age_ms() >= 50);
    }
}
