//! Weather Client Module
//!
//! Cache-first lookup orchestration: serve from the cache when possible,
//! otherwise fetch, normalize and populate.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheStats, TtlCache};
use crate::error::Result;
use crate::fetch::FetchPort;
use crate::models::WeatherReport;

// == Weather Client ==
/// Cache-first view over the fetch port.
///
/// Cheap to clone: clones share the same cache and fetch port. The background
/// refresher holds one clone and drives the same lookup path as foreground
/// callers.
#[derive(Clone)]
pub struct WeatherClient {
    cache: Arc<RwLock<TtlCache<WeatherReport>>>,
    fetcher: Arc<dyn FetchPort>,
}

impl WeatherClient {
    // == Constructor ==
    pub(crate) fn new(
        cache: Arc<RwLock<TtlCache<WeatherReport>>>,
        fetcher: Arc<dyn FetchPort>,
    ) -> Self {
        Self { cache, fetcher }
    }

    // == Lookup ==
    /// Returns the current weather for `key`, cache-first.
    ///
    /// A cache hit returns the stored report with no network activity. On
    /// miss or expiry the fetch port is invoked exactly once, the raw payload
    /// is normalized, cached and returned. Fetch failures propagate verbatim
    /// and are never cached.
    ///
    /// The cache lock is released before the fetch, so two concurrent lookups
    /// for the same missing key may both hit the network; the second write
    /// simply overwrites the first. Callers sensitive to duplicate upstream
    /// calls must de-duplicate themselves.
    pub async fn lookup_by_key(&self, key: &str) -> Result<WeatherReport> {
        if let Some(report) = self.cache.write().await.get(key) {
            debug!(%key, "serving weather from cache");
            return Ok(report);
        }

        info!(%key, "cache miss, fetching weather from provider");
        let raw = self.fetcher.fetch(key).await?;
        let report = WeatherReport::from(raw);

        self.cache
            .write()
            .await
            .add(key.to_string(), report.clone());
        debug!(%key, "cached fresh weather report");

        Ok(report)
    }

    // == Cached Keys ==
    /// Snapshot of currently cached keys, oldest insertion first.
    ///
    /// May include keys whose entries are already expired but not yet swept.
    pub async fn cached_keys(&self) -> Vec<String> {
        self.cache.read().await.keys()
    }

    // == Stats ==
    /// Current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}
