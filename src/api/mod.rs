//! Launchboard HTTP API
//!
//! HTTP layer for the launch records dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Dashboard page
//!
//! ## Controls
//! - `GET /api/v1/sites` - Dropdown options and slider bounds
//!
//! ## Charts
//! - `GET /api/v1/charts/success` - Success pie chart data
//! - `GET /api/v1/charts/payload` - Payload/outcome scatter chart data
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use launchboard::api::{serve, ApiConfig, AppState};
//! use launchboard::data::load_csv;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = load_csv(std::path::Path::new("data/spacex_launch_dash.csv"))?;
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(Arc::new(result.table), config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Control routes
        .route("/sites", get(routes::sites::list_sites))
        // Chart routes
        .route("/charts/success", get(routes::charts::success_chart))
        .route("/charts/payload", get(routes::charts::payload_chart));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::dashboard))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Launchboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Launchboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LaunchRecord, LaunchTable, Outcome};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Success),
            LaunchRecord::new("CCAFS LC-40", 600.0, Outcome::Failure),
            LaunchRecord::new("KSC LC-39A", 9000.0, Outcome::Success),
        ]);
        let config = ApiConfig::default();

        let state = AppState::new(Arc::new(table), config);
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_sites() {
        let app = create_test_app();
        let (status, body) = get_json(app, "/api/v1/sites").await;

        assert_eq!(status, StatusCode::OK);
        let options: Vec<&str> = body["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(options, vec!["CCAFS LC-40", "KSC LC-39A", "ALL"]);
        assert_eq!(body["default"], "ALL");
        assert_eq!(body["payload_max"], 9000.0);
    }

    #[tokio::test]
    async fn test_success_chart_all_sites() {
        let app = create_test_app();
        let (status, body) = get_json(app, "/api/v1/charts/success").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Total Success Launches By Site");
        assert_eq!(body["labels"][0], "CCAFS LC-40");
        assert_eq!(body["values"][0], 1);
    }

    #[tokio::test]
    async fn test_success_chart_single_site() {
        let app = create_test_app();
        let (status, body) = get_json(app, "/api/v1/charts/success?site=CCAFS%20LC-40").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Total Success Launches for site CCAFS LC-40");
        assert_eq!(body["labels"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_success_chart_unknown_site_is_empty() {
        let app = create_test_app();
        let (status, body) = get_json(app, "/api/v1/charts/success?site=Nowhere").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["labels"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_payload_chart_defaults_to_full_range() {
        let app = create_test_app();
        let (status, body) = get_json(app, "/api/v1/charts/payload").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["points"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_payload_chart_with_range() {
        let app = create_test_app();
        let (status, body) = get_json(app, "/api/v1/charts/payload?min=0&max=1000").await;

        assert_eq!(status, StatusCode::OK);
        let points = body["points"].as_array().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0]["payload_mass_kg"], 500.0);
        assert_eq!(points[0]["outcome"], 1);
    }

    #[tokio::test]
    async fn test_payload_chart_inverted_range_rejected() {
        let app = create_test_app();
        let (status, body) = get_json(app, "/api/v1/charts/payload?min=900&max=100").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "QUERY_ERROR");
    }
}
