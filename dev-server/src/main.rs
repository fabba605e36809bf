//! Development server for auction UI development
//!
//! Serves the fake backend with a dataset covering every auction time
//! window, so the item page can be exercised without the real backend.
//!
//! Usage: cargo run -p dev-server
//! The port defaults to 8000 and can be set with DEV_SERVER_PORT.

use anyhow::{Context, Result};
use test_helpers::{Config, FakeStore, mock::DevDataset, telemetry};
use tracing::info;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting auction development server");

    let port = match std::env::var("DEV_SERVER_PORT") {
        Ok(port) => port.parse().context("DEV_SERVER_PORT must be a port")?,
        Err(_) => DEFAULT_PORT,
    };

    let store = FakeStore::default();
    info!("📊 Setting up development test data...");
    let dataset = DevDataset::create(&store);

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
    };
    let server = test_helpers::build(&mut config, store)?;
    let handle = tokio::spawn(server);

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}/api/v1", config.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://localhost:{} trunk serve",
        config.port
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::select! {
        result = handle => {
            if let Err(e) = result.context("server task failed")? {
                telemetry::log_error(e);
            }
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("🛑 Shutting down development server");
        }
    }
    Ok(())
}
