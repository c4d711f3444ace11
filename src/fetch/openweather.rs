//! OpenWeatherMap Transport
//!
//! Concrete reqwest-backed implementation of the fetch port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{Result, WeatherError};
use crate::fetch::FetchPort;
use crate::models::RawObservation;

/// Per-request deadline for provider calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// == OpenWeather Fetcher ==
/// Fetches current weather from the OpenWeatherMap "current weather" endpoint.
pub struct OpenWeatherFetcher {
    /// Shared HTTP client (connection pool)
    http: Client,
    /// Provider base URL, e.g. `https://api.openweathermap.org/data/2.5`
    base_url: String,
    /// API key passed as the `appid` query parameter
    credential: String,
}

impl OpenWeatherFetcher {
    // == Constructor ==
    /// Creates a fetcher for the given base URL and API key.
    pub fn new(base_url: impl Into<String>, credential: impl Into<String>) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            credential: credential.into(),
        })
    }
}

#[async_trait]
impl FetchPort for OpenWeatherFetcher {
    async fn fetch(&self, key: &str) -> Result<RawObservation> {
        let url = format!("{}/weather", self.base_url);
        debug!(%key, "requesting current weather");

        let response = self
            .http
            .get(&url)
            .query(&[("q", key), ("appid", self.credential.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Pull the provider's message out of the error body if there is one
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error")
                .to_string();
            return Err(WeatherError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        // Read the body over the wire first (transport error), then decode it
        // (validation error) - the two failure modes stay distinct.
        let bytes = response.bytes().await?;
        let raw = serde_json::from_slice(&bytes)?;
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_construction() {
        let fetcher =
            OpenWeatherFetcher::new("https://api.openweathermap.org/data/2.5", "key").unwrap();
        assert_eq!(fetcher.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(fetcher.credential, "key");
    }
}
