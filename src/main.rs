//! Chat UI server.
//!
//! Entry point: loads configuration and serves the rendered pages.

use std::sync::Arc;

use chatui::config::AppConfig;
use chatui::server::start_server;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (M-LOG-STRUCTURED)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load .env (if present)
    let _ = dotenv();

    let config = Arc::new(AppConfig::load()?);

    info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        title = %config.ui.title,
        "Configuration loaded"
    );

    start_server(config).await?;
    Ok(())
}
