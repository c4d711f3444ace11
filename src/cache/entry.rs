//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cache entry: a value plus the instant it was inserted.
///
/// The TTL itself is a cache-wide setting, so the entry only records when it
/// was written; staleness is judged against the owning cache's TTL.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the entry was inserted (or last overwritten)
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry timestamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is still valid while its age is exactly
    /// equal to the TTL; it expires once the age strictly exceeds it.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() > ttl
    }

    // == Age ==
    /// Returns how long ago the entry was inserted.
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }
}
