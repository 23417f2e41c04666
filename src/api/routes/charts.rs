//! Chart Routes
//!
//! Endpoints that compute the chart data behind the dashboard.
//!
//! - GET /api/v1/charts/success - success pie chart
//! - GET /api/v1/charts/payload - payload/outcome scatter chart

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    PayloadChartParams, PieChartResponse, ScatterChartResponse, SuccessChartParams,
};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::{payload_scatter, success_counts, PayloadRange, SiteFilter, MAX_PAYLOAD_KG};

/// GET /api/v1/charts/success?site=ALL
///
/// Success counts for the pie chart. With "ALL", one slice per site with
/// its success total; with a specific site, success vs. failed counts for
/// that site. An unknown site returns an empty chart.
pub async fn success_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuccessChartParams>,
) -> Json<PieChartResponse> {
    let filter = SiteFilter::parse(params.site.as_deref().unwrap_or(SiteFilter::ALL));
    let counts = success_counts(&state.table, &filter);

    let title = match &filter {
        SiteFilter::All => "Total Success Launches By Site".to_string(),
        SiteFilter::Site(name) => format!("Total Success Launches for site {}", name),
    };

    tracing::debug!(site = %filter, slices = counts.len(), "Computed success chart");

    Json(PieChartResponse::new(title, counts))
}

/// GET /api/v1/charts/payload?site=ALL&min=0&max=10000
///
/// Payload/outcome points for the scatter chart. Returns 400 for an
/// inverted or out-of-bounds range; an in-range empty result is 200.
pub async fn payload_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PayloadChartParams>,
) -> ApiResult<Json<ScatterChartResponse>> {
    let filter = SiteFilter::parse(params.site.as_deref().unwrap_or(SiteFilter::ALL));
    let range = PayloadRange::new(
        params.min.unwrap_or(0.0),
        params.max.unwrap_or(MAX_PAYLOAD_KG),
    )?;

    let points = payload_scatter(&state.table, &filter, &range);

    let title = match &filter {
        SiteFilter::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteFilter::Site(name) => {
            format!("Correlation between Payload and Success for {}", name)
        }
    };

    tracing::debug!(
        site = %filter,
        low = range.low(),
        high = range.high(),
        points = points.len(),
        "Computed payload chart"
    );

    Ok(Json(ScatterChartResponse { title, points }))
}
