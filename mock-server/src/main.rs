//! # Mock Content API Server
//!
//! Standalone binary serving the canned catalog for local development.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Mock content API listening");
    info!("Demo login: {} / {}", mock_server::DEMO_EMAIL, mock_server::DEMO_PASSWORD);

    mock_server::run(listener).await?;
    Ok(())
}
