//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::query::{CategoryCount, ScatterPoint};

// ============================================
// SITES DTOs
// ============================================

/// Dropdown options and slider bounds for the dashboard controls
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    /// Dropdown options: sites in first-seen order, then the "ALL" sentinel
    pub options: Vec<String>,
    /// Default dropdown value
    pub default: String,
    /// Minimum payload mass in the dataset
    pub payload_min: f64,
    /// Maximum payload mass in the dataset
    pub payload_max: f64,
    /// Slider configuration
    pub slider: SliderConfig,
}

/// Payload range slider parameters
#[derive(Debug, Serialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial [low, high] selection
    pub value: [f64; 2],
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
            value: [400.0, 9_600.0],
        }
    }
}

// ============================================
// CHART DTOs
// ============================================

/// Query parameters for the success pie chart
#[derive(Debug, Deserialize)]
pub struct SuccessChartParams {
    /// Site dropdown value, defaults to "ALL"
    #[serde(default)]
    pub site: Option<String>,
}

/// Pie chart response: one label/value pair per slice
#[derive(Debug, Serialize)]
pub struct PieChartResponse {
    /// Chart title
    pub title: String,
    /// Slice labels
    pub labels: Vec<String>,
    /// Slice values
    pub values: Vec<u32>,
}

impl PieChartResponse {
    pub fn new(title: impl Into<String>, counts: Vec<CategoryCount>) -> Self {
        let (labels, values) = counts.into_iter().map(|c| (c.label, c.count)).unzip();
        Self {
            title: title.into(),
            labels,
            values,
        }
    }
}

/// Query parameters for the payload scatter chart
#[derive(Debug, Deserialize)]
pub struct PayloadChartParams {
    /// Site dropdown value, defaults to "ALL"
    #[serde(default)]
    pub site: Option<String>,
    /// Range low end, defaults to 0
    #[serde(default)]
    pub min: Option<f64>,
    /// Range high end, defaults to 10000
    #[serde(default)]
    pub max: Option<f64>,
}

/// Scatter chart response
#[derive(Debug, Serialize)]
pub struct ScatterChartResponse {
    /// Chart title
    pub title: String,
    /// Matching (payload, outcome, site) triples in table order
    pub points: Vec<ScatterPoint>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Dataset status
    pub dataset: String,
    /// Number of loaded launch records
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
