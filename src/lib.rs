//! # Launchboard
//!
//! SpaceX Launch Records Dashboard - a small web service that loads a
//! tabular dataset of rocket launches and serves an interactive dashboard
//! with a site dropdown, a payload range slider, and two charts.
//!
//! ## Features
//!
//! - **Immutable in-memory table**: the dataset is loaded once from CSV at
//!   startup and never changes
//! - **Stateless chart queries**: per-site success counts and payload range
//!   filtering, with no side effects
//! - **REST API**: chart data and dashboard controls served with Axum
//! - **Single-page dashboard**: dropdown and slider drive both charts
//!
//! ## Modules
//!
//! - [`data`]: Launch records table and CSV loader
//! - [`query`]: The two chart queries (success counts, payload scatter)
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::api::{serve, ApiConfig, AppState};
//! use launchboard::data::load_csv;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the dataset once; it is immutable afterwards
//!     let result = load_csv(std::path::Path::new("data/spacex_launch_dash.csv"))?;
//!     println!("{} launches across {} sites", result.table.len(), result.table.sites().len());
//!
//!     // Serve the dashboard
//!     let config = ApiConfig::default();
//!     let state = AppState::new(Arc::new(result.table), config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod data;
pub mod query;

// Re-export top-level types for convenience
pub use data::{CsvLoadResult, DataError, DataResult, LaunchRecord, LaunchTable, Outcome};

pub use query::{
    payload_scatter, success_counts, CategoryCount, PayloadRange, QueryError, QueryResult,
    ScatterPoint, SiteFilter,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
