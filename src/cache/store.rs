//! Cache Store Module
//!
//! Bounded TTL cache combining HashMap storage with insertion-order eviction
//! and lazy expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder};

// == TTL Cache ==
/// Bounded cache with a cache-wide TTL and oldest-inserted eviction.
///
/// The cache never fails: `add` always succeeds and `get` reports absence as
/// `None`. Expiration is lazy; an expired entry stays in the map until the
/// next `get` for its key removes it, so `keys()` may include keys that
/// resolve to `None` on the next read. Eviction is strictly by insertion
/// order: neither reads nor overwrites renew a key's position.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion order tracker driving eviction
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Time-to-live applied to every entry
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates a new TtlCache with the given capacity and TTL.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold (> 0)
    /// * `ttl` - Time-to-live applied to every entry (> 0)
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            capacity,
            ttl,
        }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, timestamped now.
    ///
    /// A brand-new key that would exceed capacity first evicts the single
    /// oldest-inserted entry (by insertion order, not by expiry). Overwriting
    /// an existing key neither grows the cache nor triggers eviction, and the
    /// key keeps its original position in the eviction order.
    pub fn add(&mut self, key: String, value: V) {
        let is_overwrite = self.entries.contains_key(&key);

        // If not overwriting and at capacity, evict the oldest-inserted entry
        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted_key) = self.order.pop_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        if !is_overwrite {
            self.order.push(key.clone());
        }
        self.entries.insert(key, CacheEntry::new(value));

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a clone of the value for `key`, if present and unexpired.
    ///
    /// An entry whose age exceeds the TTL is removed here (lazy expiration)
    /// and reported as absent, so this read may mutate the mapping.
    pub fn get(&mut self, key: &str) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(self.ttl) {
                self.entries.remove(key);
                self.order.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Keys ==
    /// Returns a snapshot of the current key set, oldest insertion first.
    ///
    /// Includes entries that are already expired but not yet swept; callers
    /// must tolerate a key resolving to `None` on the next `get`.
    pub fn keys(&self) -> Vec<String> {
        self.order.iter().cloned().collect()
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
