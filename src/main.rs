//! Donordash API Server
//!
//! Run with: cargo run --bin donordash-api
//!
//! # Configuration
//!
//! Loaded from `config.toml` (or the platform config dir), with environment
//! overrides:
//! - `DONORDASH_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `DONORDASH_API_PORT`: Port to listen on (default: 8000)
//! - `DONORDASH_LOG_LEVEL`: Log level (default: info)
//! - `DONORDASH_LOG_FORMAT`: Log format, pretty or json (default: pretty)
//!
//! CLI flags override both.

use anyhow::Context;
use clap::Parser;
use donordash::api::{serve, AppState};
use donordash::config::Config;
use donordash::registry::Registry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "donordash-api", about = "Donation referral dashboard API server")]
struct Cli {
    /// Path to a config file (default: platform config dir, then ./config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };

    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }

    init_logging(&config);

    tracing::info!("Starting Donordash API server v{}", env!("CARGO_PKG_VERSION"));

    let registry = Arc::new(Registry::seeded());
    tracing::info!(
        participants = registry.leaderboard().len(),
        "registry seeded with demo leaderboard"
    );

    let state = AppState::new(registry, config.api.clone());
    serve(state, &config.api).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "donordash={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
