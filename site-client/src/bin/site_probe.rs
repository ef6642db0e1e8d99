//! # Site Probe
//!
//! Liveness probe for the content API: hits `/health` and `/stats` and
//! prints the results. Exits non-zero when either call fails, which makes
//! it usable from deployment checks.

use std::sync::Arc;

use site_client::{ApiClient, ClientConfig, MemoryTokenStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url(), "Probing content API");

    let client = ApiClient::new(config, Arc::new(MemoryTokenStore::new()));

    let health = site_client::services::api::stats::health_check(&client).await?;
    println!(
        "health: {} (version {}, reported at {})",
        health.data.status, health.data.version, health.data.timestamp
    );

    let stats = site_client::services::api::stats::get_stats(&client).await?;
    println!(
        "stats: {} projects, {} partners, {:.0}t CO2 saved, {} years",
        stats.data.total_projects,
        stats.data.partner_count,
        stats.data.co2_saved,
        stats.data.years_experience
    );

    Ok(())
}
