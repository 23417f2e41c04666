//! Launchboard Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Environment variables:
//! - `LAUNCHBOARD_DATASET`: Path to the launch records CSV (default: data/spacex_launch_dash.csv)
//! - `LAUNCHBOARD_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `LAUNCHBOARD_API_PORT`: Port to listen on (default: 8082)
//! - `RUST_LOG`: Log level (default: info)
//!
//! Command-line flags override both the config file and the environment.

use anyhow::Context;
use clap::Parser;
use launchboard::api::{serve, ApiConfig, AppState};
use launchboard::config::Config;
use launchboard::data::load_csv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launchboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SpaceX launch records dashboard")]
struct Cli {
    /// Path to a config file (default: standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the launch records CSV
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "launchboard=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Launchboard v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::load_default(),
    };

    // CLI flags win over config file and environment
    if let Some(data) = cli.data {
        config.dataset.path = data;
    }
    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }

    // Load the dataset once; it is immutable for the process lifetime
    tracing::info!("Loading dataset from {:?}", config.dataset.path);
    let result = load_csv(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset {:?}", config.dataset.path))?;

    if result.rows_failed > 0 {
        tracing::warn!(
            rows_failed = result.rows_failed,
            "Some dataset rows were skipped"
        );
        for error in &result.errors {
            tracing::debug!("{}", error);
        }
    }

    let table = Arc::new(result.table);
    let (payload_min, payload_max) = table.payload_bounds();
    tracing::info!(
        records = table.len(),
        sites = table.sites().len(),
        payload_min,
        payload_max,
        "Dataset loaded"
    );

    // Run server
    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
    tracing::info!("Starting server on {}", api_config.addr());

    let state = AppState::new(table, api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("Launchboard stopped");
    Ok(())
}
