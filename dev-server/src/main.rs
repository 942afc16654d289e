//! Development server for UI work
//!
//! This binary keeps the fixture content API running with mock posts,
//! lessons, events and media laid out around the current time, so the UI can
//! be developed without the real backend.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use jiff::Timestamp;
use test_helpers::{Config, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();

    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting content development server");

    let config = Config::from_env()?;
    let app = test_helpers::spawn_app_with(config, Timestamp::now()).await?;

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}/api/", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("");
    app.dataset().print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    // Keep server running until Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!(
        "🛑 Shutting down development server after {} requests",
        app.requests().len()
    );
    Ok(())
}
