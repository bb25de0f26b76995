//! Shopping trends HTTP server binary.
//!
//! Loads the dataset and the location coordinate table once, then serves the
//! dashboard pages as JSON.
//!
//! # Usage
//!
//! ```bash
//! DATASET_PATH=data/shopping_trends_updated.csv \
//!   cargo run --bin shopping-trends-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATASET_PATH`: Source CSV (default: shopping_trends_updated.csv)
//! - `GEO_REFERENCE`: Coordinate table path or URL (default: US state capitals)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use shopping_trends::config::DashboardConfig;
use shopping_trends::http::{create_router, AppState};
use shopping_trends::store::{load_geo_reference, DatasetStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting shopping trends server");

    let config = DashboardConfig::load()?;

    let store = DatasetStore::new();
    let dataset_path = config.data.dataset_path.clone();
    let dataset = {
        let store = store.clone();
        tokio::task::spawn_blocking(move || store.load(&dataset_path)).await??
    };
    info!(rows = dataset.len(), "Dataset ready");

    let geo = Arc::new(load_geo_reference(&config.geo_source()).await?);

    let app = create_router(AppState::new(dataset, geo));

    let addr = config.bind_address()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
