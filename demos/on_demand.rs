//! On-demand lookup demo.
//!
//! Fetches a couple of cities; repeated lookups are served from the cache.
//! Requires `OPENWEATHERMAP_API_KEY` in the environment.
//!
//! Run with: `cargo run --example on_demand`

use std::sync::Arc;

use anyhow::Context;
use skycache::{ClientConfig, ClientSession, CredentialRegistry, Mode, OpenWeatherFetcher};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skycache=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = std::env::var("OPENWEATHERMAP_API_KEY")
        .context("OPENWEATHERMAP_API_KEY must be set")?;

    let config = ClientConfig::from_env();
    let registry = CredentialRegistry::new();
    let fetcher = Arc::new(OpenWeatherFetcher::new(config.api_url.clone(), &api_key)?);

    let mut session =
        ClientSession::connect(&api_key, Mode::OnDemand, &config, &registry, fetcher)?;

    // The second and third lookups hit the cache, no network involved
    session.lookup_by_key("Almaty").await?;
    session.lookup_by_key("Almaty").await?;
    let almaty = session.lookup_by_key("Almaty").await?;
    println!("{}", serde_json::to_string_pretty(&almaty)?);

    let pavlodar = session.lookup_by_key("Pavlodar").await?;
    println!("{}", serde_json::to_string_pretty(&pavlodar)?);

    let stats = session.stats().await;
    println!(
        "cache: {} entries, hit rate {:.0}%",
        stats.total_entries,
        stats.hit_rate() * 100.0
    );

    session.teardown().await;
    Ok(())
}
