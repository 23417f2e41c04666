//! Dashboard Route
//!
//! Serves the single-page dashboard. The page fetches its controls from
//! /api/v1/sites and redraws both charts whenever the dropdown or slider
//! changes.
//!
//! - GET / - dashboard page

use axum::response::Html;

/// The dashboard page, embedded at compile time
const DASHBOARD_HTML: &str = include_str!("../../../assets/dashboard.html");

/// GET /
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
