//! skycache - a cached weather API client
//!
//! Shields callers from redundant provider calls with a bounded TTL cache,
//! and optionally keeps that cache warm with a background refresh loop.
//!
//! # Layout
//! - [`cache`]: bounded TTL cache with oldest-inserted eviction
//! - [`fetch`]: the fetch port trait and the reqwest-backed provider transport
//! - [`client`]: cache-first lookup path
//! - [`tasks`]: the background refresher
//! - [`session`]: credential-bound lifecycle (scoped acquisition, teardown)
//! - [`registry`]: one live session per credential

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod registry;
pub mod session;
pub mod tasks;

pub use client::WeatherClient;
pub use config::ClientConfig;
pub use error::{Result, WeatherError};
pub use fetch::{FetchPort, OpenWeatherFetcher};
pub use models::{RawObservation, WeatherReport};
pub use registry::CredentialRegistry;
pub use session::{ClientSession, Mode};
