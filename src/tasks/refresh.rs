//! Background Refresh Task
//!
//! Recurring task that re-drives the lookup path for every cached key,
//! keeping entries from expiring under steady polling.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::client::WeatherClient;

// == Refresh Handle ==
/// Handle to a running refresh task.
///
/// Stopping is cooperative: the signal interrupts the inter-cycle sleep and
/// is checked between keys, but never waits on an in-flight fetch.
pub struct RefreshHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    // == Stop ==
    /// Requests the loop to stop and returns immediately.
    ///
    /// Calling stop after the loop has already exited is a no-op.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    // == Abort ==
    /// Forcibly aborts the task. Last-resort cleanup for drop paths.
    pub fn abort(&self) {
        self.task.abort();
    }

    // == Is Finished ==
    /// Returns true once the loop has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

// == Spawn ==
/// Spawns the background refresh loop.
///
/// Each cycle snapshots the cached keys and calls `lookup_by_key` for every
/// one sequentially, then sleeps for `interval`. Keys whose entries are still
/// fresh short-circuit on the cache hit, so the loop only reaches the network
/// for entries at or past expiry. A failure for one key is logged and the
/// cycle continues with the rest.
///
/// # Arguments
/// * `client` - Client clone sharing the session's cache and fetch port
/// * `interval` - Sleep between refresh cycles
pub fn spawn_refresh_task(client: WeatherClient, interval: Duration) -> RefreshHandle {
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        info!(
            interval_secs = interval.as_secs(),
            "background refresh task started"
        );

        'cycle: loop {
            for key in client.cached_keys().await {
                if *stop_rx.borrow() {
                    break 'cycle;
                }
                match client.lookup_by_key(&key).await {
                    Ok(_) => debug!(%key, "refreshed cache entry"),
                    // One location's failure must not block the others
                    Err(err) => warn!(%key, %err, "refresh failed, continuing cycle"),
                }
            }

            debug!("refresh cycle complete, sleeping");
            tokio::select! {
                _ = stop_rx.changed() => break 'cycle,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        info!("background refresh task stopped");
    });

    RefreshHandle { stop_tx, task }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use crate::error::{Result, WeatherError};
    use crate::fetch::FetchPort;
    use crate::models::{RawObservation, WeatherReport};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Fake port that fails for a chosen set of keys.
    struct SelectivePort {
        calls: AtomicUsize,
        failing: HashSet<String>,
    }

    impl SelectivePort {
        fn new(failing: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                failing: failing.iter().map(|k| k.to_string()).collect(),
            })
        }
    }

    #[async_trait]
    impl FetchPort for SelectivePort {
        async fn fetch(&self, key: &str) -> Result<RawObservation> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.contains(key) {
                return Err(WeatherError::Remote {
                    status: 404,
                    message: "city not found".to_string(),
                });
            }
            Ok(RawObservation {
                name: key.to_string(),
                ..Default::default()
            })
        }
    }

    fn client_with(port: Arc<SelectivePort>, ttl: Duration) -> WeatherClient {
        let cache = Arc::new(RwLock::new(TtlCache::<WeatherReport>::new(10, ttl)));
        WeatherClient::new(cache, port)
    }

    #[tokio::test]
    async fn test_refresh_keeps_entry_alive_past_ttl() {
        let port = SelectivePort::new(&[]);
        let client = client_with(port, Duration::from_millis(150));

        // Populate one key, then let the refresher run well past the TTL
        client.lookup_by_key("London").await.unwrap();
        let handle = spawn_refresh_task(client.clone(), Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(450)).await;

        // Without the refresher this entry would have expired long ago
        assert!(client.lookup_by_key("London").await.is_ok());
        assert!(!client.cached_keys().await.is_empty());

        handle.stop();
    }

    #[tokio::test]
    async fn test_refresh_partial_failure_does_not_kill_loop() {
        let port = SelectivePort::new(&["Atlantis"]);
        let cache = Arc::new(RwLock::new(TtlCache::<WeatherReport>::new(
            10,
            Duration::from_millis(100),
        )));

        // Seed the failing key directly; a lookup would refuse to cache it
        cache.write().await.add(
            "Atlantis".to_string(),
            WeatherReport::from(RawObservation::default()),
        );
        let client = WeatherClient::new(cache, port);
        client.lookup_by_key("London").await.unwrap();

        let handle = spawn_refresh_task(client.clone(), Duration::from_millis(40));
        tokio::time::sleep(Duration::from_millis(300)).await;

        // The loop survived Atlantis failing every cycle and kept London fresh
        assert!(!handle.is_finished());
        assert!(client
            .cached_keys()
            .await
            .contains(&"London".to_string()));

        handle.stop();
    }

    #[tokio::test]
    async fn test_stop_interrupts_sleep_promptly() {
        let port = SelectivePort::new(&[]);
        let client = client_with(port, Duration::from_secs(60));

        // Long interval: without interruption the task would sleep for an hour
        let handle = spawn_refresh_task(client, Duration::from_secs(3600));
        tokio::time::sleep(Duration::from_millis(50)).await;

        handle.stop();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(handle.is_finished());
    }

    #[tokio::test]
    async fn test_stop_twice_is_noop() {
        let port = SelectivePort::new(&[]);
        let client = client_with(port, Duration::from_secs(60));

        let handle = spawn_refresh_task(client, Duration::from_secs(3600));
        handle.stop();
        handle.stop();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished());
    }
}
