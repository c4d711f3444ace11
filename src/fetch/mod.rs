//! Fetch Port Module
//!
//! Abstract network-fetch capability the client depends on. The cache and
//! client layers only see this trait; the concrete reqwest transport lives in
//! `openweather` and can be swapped for a fake in tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::RawObservation;

mod openweather;

pub use openweather::OpenWeatherFetcher;

// == Fetch Port ==
/// Fetches the raw observation for a location key.
///
/// Implementations fail with [`WeatherError::Transport`] when the provider is
/// unreachable and [`WeatherError::Remote`] when it answers with a
/// non-success status.
///
/// [`WeatherError::Transport`]: crate::error::WeatherError::Transport
/// [`WeatherError::Remote`]: crate::error::WeatherError::Remote
#[async_trait]
pub trait FetchPort: Send + Sync {
    /// Fetches current weather for `key` (a location name).
    async fn fetch(&self, key: &str) -> Result<RawObservation>;
}
