//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the weather provider API
    pub api_url: String,
    /// Maximum number of entries the cache can hold
    pub cache_capacity: usize,
    /// Cache entry time-to-live in seconds
    pub cache_ttl: u64,
    /// Background refresh interval in seconds (polling mode only)
    pub refresh_interval: u64,
}

impl ClientConfig {
    /// Creates a new ClientConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `WEATHER_API_URL` - Provider base URL (default: OpenWeatherMap v2.5)
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 10)
    /// - `CACHE_TTL` - Entry TTL in seconds (default: 600)
    /// - `REFRESH_INTERVAL` - Refresh frequency in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("WEATHER_API_URL").unwrap_or(defaults.api_url),
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_capacity),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            refresh_interval: env::var("REFRESH_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_interval),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openweathermap.org/data/2.5".to_string(),
            cache_capacity: 10,
            cache_ttl: 600,
            refresh_interval: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.cache_capacity, 10);
        assert_eq!(config.cache_ttl, 600);
        assert_eq!(config.refresh_interval, 30);
        assert!(config.api_url.contains("openweathermap"));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("WEATHER_API_URL");
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("CACHE_TTL");
        env::remove_var("REFRESH_INTERVAL");

        let config = ClientConfig::from_env();
        assert_eq!(config.cache_capacity, 10);
        assert_eq!(config.cache_ttl, 600);
        assert_eq!(config.refresh_interval, 30);
    }

    #[test]
    fn test_config_from_env_ignores_garbage() {
        env::set_var("CACHE_CAPACITY", "not-a-number");
        let config = ClientConfig::from_env();
        assert_eq!(config.cache_capacity, 10);
        env::remove_var("CACHE_CAPACITY");
    }
}
