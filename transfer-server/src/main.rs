use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use transfer_server::cache::{CacheConfig, CachedTransferClient};
use transfer_server::instructions::SynthesisConfig;
use transfer_server::journey_maps::{TransferClient, TransferClientConfig};
use transfer_server::stations::StationCatalog;
use transfer_server::web::{AppState, create_router};

/// Read an environment variable, falling back to a default.
fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("JOURNEY_MAPS_API_KEY").unwrap_or_else(|_| {
        warn!("JOURNEY_MAPS_API_KEY not set; transfer requests will fail");
        String::new()
    });
    let stations_file = env_or("STATIONS_FILE", "stations.json");
    let static_dir = env_or("STATIC_DIR", "static");
    let addr: SocketAddr = env_or("BIND_ADDR", "127.0.0.1:3000").parse()?;

    let client = TransferClient::new(TransferClientConfig::new(api_key))?;
    let transfers = CachedTransferClient::new(client, &CacheConfig::default());

    // Fail fast: the form is useless without stations to pick from
    let stations = StationCatalog::load(&stations_file)?;

    let state = AppState::new(transfers, stations, SynthesisConfig::default());
    let app = create_router(state, &static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Transfer guide listening on http://{addr}");
    info!("  GET  /                  - Transfer form");
    info!("  GET  /health            - Health check");
    info!("  GET  /stations          - Station lookup");
    info!("  POST /transfer          - Directions for a station and two tracks");
    info!("  POST /api/instructions  - Directions for a feature collection");

    axum::serve(listener, app).await?;
    Ok(())
}
