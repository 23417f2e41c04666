//! Sites Route
//!
//! Dropdown options and slider bounds for the dashboard controls.
//!
//! - GET /api/v1/sites

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{SitesResponse, SliderConfig};
use crate::api::state::AppState;
use crate::query::SiteFilter;

/// GET /api/v1/sites
///
/// Returns the dropdown options (sites in first-seen order, then the "ALL"
/// sentinel), the dataset's payload bounds, and the slider defaults.
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<SitesResponse> {
    let mut options: Vec<String> = state.table.sites().to_vec();
    options.push(SiteFilter::ALL.to_string());

    let (payload_min, payload_max) = state.table.payload_bounds();

    Json(SitesResponse {
        options,
        default: SiteFilter::ALL.to_string(),
        payload_min,
        payload_max,
        slider: SliderConfig::default(),
    })
}
