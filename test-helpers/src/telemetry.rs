//! Tracing setup shared by the fixture API, its tests and the dev-server.

use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build a subscriber that honours `RUST_LOG`, falling back to
/// `default_filter`.
pub fn get_subscriber(default_filter: String) -> impl Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
}

/// Install `subscriber` as the global default and route `log` records (from
/// actix-web) into it. Only call once.
pub fn init_subscriber(
    subscriber: impl Subscriber + Send + Sync,
) -> anyhow::Result<()> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
