//! Polling mode demo.
//!
//! Uses scoped acquisition: the background refresher starts when the scope
//! is entered and everything is torn down when it exits.
//! Requires `OPENWEATHERMAP_API_KEY` in the environment.
//!
//! Run with: `cargo run --example polling`

use std::sync::Arc;
use std::time::Duration;

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

    ClientSession::scoped(
        &api_key,
        Mode::Polling,
        &config,
        &registry,
        fetcher,
        |client| async move {
            let almaty = client.lookup_by_key("Almaty").await?;
            println!("{}", serde_json::to_string_pretty(&almaty)?);

            let pavlodar = client.lookup_by_key("Pavlodar").await?;
            println!("{}", serde_json::to_string_pretty(&pavlodar)?);

            println!("waiting to observe the background refresh...");
            tokio::time::sleep(Duration::from_secs(90)).await;

            // Still a cache hit: the refresher kept the entry warm
            let pavlodar = client.lookup_by_key("Pavlodar").await?;
            println!("{}", serde_json::to_string_pretty(&pavlodar)?);

            anyhow::Ok(())
        },
    )
    .await??;

    Ok(())
}
