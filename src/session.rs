//! Client Session Module
//!
//! Lifecycle guard around the weather client: one live session per
//! credential, optional background refresher, deterministic teardown.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::cache::{CacheStats, TtlCache};
use crate::client::WeatherClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::fetch::FetchPort;
use crate::models::WeatherReport;
use crate::registry::CredentialRegistry;
use crate::tasks::{spawn_refresh_task, RefreshHandle};

// == Mode ==
/// Operating mode selected at session construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No background activity; every miss triggers a fetch
    OnDemand,
    /// Background refresher re-fetches cached keys on a fixed interval
    Polling,
}

// == Client Session ==
/// A live, credential-bound weather client with owned cache and refresher.
///
/// The supported lifecycle is scoped acquisition ([`ClientSession::scoped`])
/// or an explicit [`start`](Self::start)/[`teardown`](Self::teardown) pair.
/// Dropping a session without teardown triggers best-effort synchronous
/// cleanup (the refresher is stopped and the credential freed), but the
/// explicit path is the one to use.
pub struct ClientSession {
    credential: String,
    mode: Mode,
    refresh_interval: Duration,
    cache: Arc<RwLock<TtlCache<WeatherReport>>>,
    client: WeatherClient,
    registry: CredentialRegistry,
    refresher: Option<RefreshHandle>,
    torn_down: bool,
}

impl ClientSession {
    // == Connect ==
    /// Builds a session bound to `credential`.
    ///
    /// # Errors
    /// Fails with [`WeatherError::DuplicateCredential`] if another live
    /// session already holds the credential in `registry`.
    ///
    /// [`WeatherError::DuplicateCredential`]: crate::error::WeatherError::DuplicateCredential
    pub fn connect(
        credential: impl Into<String>,
        mode: Mode,
        config: &ClientConfig,
        registry: &CredentialRegistry,
        fetcher: Arc<dyn FetchPort>,
    ) -> Result<Self> {
        let credential = credential.into();
        registry.register(&credential)?;

        let cache = Arc::new(RwLock::new(TtlCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl),
        )));
        let client = WeatherClient::new(cache.clone(), fetcher);

        info!(credential = %credential, ?mode, "client session connected");

        Ok(Self {
            credential,
            mode,
            refresh_interval: Duration::from_secs(config.refresh_interval),
            cache,
            client,
            registry: registry.clone(),
            refresher: None,
            torn_down: false,
        })
    }

    // == Start ==
    /// Enters the active phase: in polling mode this spawns the background
    /// refresher. Starting twice, or after teardown, is a no-op.
    pub fn start(&mut self) {
        if self.torn_down || self.refresher.is_some() {
            return;
        }
        if self.mode == Mode::Polling {
            self.refresher = Some(spawn_refresh_task(
                self.client.clone(),
                self.refresh_interval,
            ));
            info!("polling mode enabled: background refresh started");
        }
    }

    // == Scoped Acquisition ==
    /// Runs `body` against a started session and always tears down on exit,
    /// whatever the body returned.
    ///
    /// The body receives a [`WeatherClient`] clone, so it can move it into
    /// spawned tasks; the cache and refresher still belong to the session and
    /// are released when the scope ends.
    pub async fn scoped<F, Fut, T>(
        credential: impl Into<String>,
        mode: Mode,
        config: &ClientConfig,
        registry: &CredentialRegistry,
        fetcher: Arc<dyn FetchPort>,
        body: F,
    ) -> Result<T>
    where
        F: FnOnce(WeatherClient) -> Fut,
        Fut: Future<Output = T>,
    {
        let mut session = Self::connect(credential, mode, config, registry, fetcher)?;
        session.start();

        let out = body(session.client.clone()).await;

        session.teardown().await;
        Ok(out)
    }

    // == Lookup ==
    /// Cache-first weather lookup. See [`WeatherClient::lookup_by_key`].
    pub async fn lookup_by_key(&self, key: &str) -> Result<WeatherReport> {
        self.client.lookup_by_key(key).await
    }

    // == Accessors ==
    /// The client view backing this session.
    pub fn client(&self) -> &WeatherClient {
        &self.client
    }

    /// The mode this session was constructed with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The credential bound to this session.
    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// Current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.client.stats().await
    }

    /// Snapshot of currently cached keys.
    pub async fn cached_keys(&self) -> Vec<String> {
        self.client.cached_keys().await
    }

    // == Teardown ==
    /// Deterministic teardown: stops the refresher, frees the credential and
    /// clears the cache. Idempotent; second and later calls are no-ops.
    ///
    /// Never fails: anything that goes wrong here is swallowed so teardown
    /// stays safe to call from any exit path.
    pub async fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        if let Some(refresher) = self.refresher.take() {
            // Signal only; the loop exits at its next check without us
            // blocking on an in-flight fetch.
            refresher.stop();
            info!("background refresh stopped");
        }

        self.registry.release(&self.credential);
        self.cache.write().await.clear();

        info!(credential = %self.credential, "client session torn down");
    }
}

impl Drop for ClientSession {
    fn drop(&mut self) {
        if self.torn_down {
            return;
        }

        // Best-effort synchronous cleanup. No async work is possible here, so
        // the cache is left to the allocator; the refresher and credential
        // must not leak.
        if let Some(refresher) = self.refresher.take() {
            refresher.stop();
            refresher.abort();
        }
        self.registry.release(&self.credential);

        warn!(
            credential = %self.credential,
            "session dropped without teardown; prefer scoped() or an explicit teardown()"
        );
    }
}
