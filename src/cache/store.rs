//! Result Cache Module
//!
//! In-memory TTL cache for normalized lookup results.
//!
//! Staleness is checked only at read time: a stale entry is removed by the
//! read that finds it, and there is no background eviction task. Unread
//! expired entries therefore persist until the process exits, which is
//! bounded in practice by the volume of distinct queries.

use std::collections::HashMap;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheKey, CacheStats};

// == Result Cache ==
/// TTL cache keyed by the composite lookup key.
#[derive(Debug)]
pub struct ResultCache {
    /// Stored lookups
    entries: HashMap<String, CacheEntry>,
    /// TTL in seconds applied to every entry
    ttl_secs: u64,
    /// Performance statistics
    stats: CacheStats,
}

impl ResultCache {
    // == Constructor ==
    /// Creates a new ResultCache with the given TTL.
    ///
    /// A TTL of zero disables caching: every read finds a stale entry.
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_secs,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Returns a clone of the entry for `key` if one exists and is fresh.
    ///
    /// A stale entry is evicted lazily by this read and counted as a miss.
    pub fn get(&mut self, key: &CacheKey) -> Option<CacheEntry> {
        let map_key = key.to_string();

        if let Some(entry) = self.entries.get(&map_key) {
            if entry.is_stale(self.ttl_secs) {
                self.entries.remove(&map_key);
                self.stats.record_expired_eviction();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            self.stats.record_hit();
            return Some(entry.clone());
        }

        self.stats.record_miss();
        None
    }

    // == Insert ==
    /// Stores a lookup result under its composite key.
    ///
    /// Insertion is unconditional, last-write-wins. Raw fallbacks are stored
    /// too, so a known-bad upstream response is not re-fetched within the TTL.
    pub fn insert(&mut self, key: &CacheKey, payload: Value, upstream_status: u16) {
        self.entries
            .insert(key.to_string(), CacheEntry::new(payload, upstream_status));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
