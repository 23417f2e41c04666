//! Chart Query Functions
//!
//! The success-count aggregation behind the pie chart and the payload range
//! filter behind the scatter chart. Both are pure reads over the table.

use serde::Serialize;
use std::collections::HashMap;

use crate::data::{LaunchTable, Outcome};

use super::filter::{PayloadRange, SiteFilter};

/// One pie chart slice: a category label and its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u32,
}

impl CategoryCount {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: 0,
        }
    }
}

/// One scatter chart point: payload mass, outcome, and site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub site: String,
}

/// Success counts for the pie chart
///
/// With no site filter, returns per-site success totals for all sites in
/// first-seen order (sites with zero successes included). With a site
/// filter, returns counts per outcome category present at that site, in
/// first-seen order. An unknown site yields an empty result.
pub fn success_counts(table: &LaunchTable, filter: &SiteFilter) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in table.records() {
        if !filter.matches(&record.site) {
            continue;
        }

        // Per-site success sums for ALL, per-outcome counts otherwise
        let (label, increment) = match filter {
            SiteFilter::All => (record.site.as_str(), record.outcome.is_success() as u32),
            SiteFilter::Site(_) => (record.outcome.label(), 1),
        };

        let slot = *index.entry(label.to_string()).or_insert_with(|| {
            counts.push(CategoryCount::new(label));
            counts.len() - 1
        });
        counts[slot].count += increment;
    }

    counts
}

/// Payload/outcome points for the scatter chart
///
/// Returns the (payload, outcome, site) triple of every record whose payload
/// mass lies within the inclusive range and whose site passes the filter,
/// preserving table order. An empty result is valid, not an error.
pub fn payload_scatter(
    table: &LaunchTable,
    filter: &SiteFilter,
    range: &PayloadRange,
) -> Vec<ScatterPoint> {
    table
        .records()
        .iter()
        .filter(|r| filter.matches(&r.site) && range.contains(r.payload_mass_kg))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            site: r.site.clone(),
        })
        .collect()
}
