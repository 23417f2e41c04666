//! Query Inputs
//!
//! The site filter (dropdown value) and inclusive payload range (slider
//! value) that parameterize the chart queries.

use std::fmt;

use super::error::{QueryError, QueryResult};

/// Upper bound of the payload slider domain, in kilograms
pub const MAX_PAYLOAD_KG: f64 = 10_000.0;

/// Site restriction for a chart query
///
/// The dropdown sends the sentinel `"ALL"` for "no site filter applied";
/// any other value restricts the query to that site. Unknown site names
/// are legal and simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteFilter {
    /// No site filter applied
    All,
    /// Restrict to one launch site
    Site(String),
}

impl SiteFilter {
    /// Sentinel dropdown value meaning "no site filter"
    pub const ALL: &'static str = "ALL";

    /// Parse a dropdown value into a filter
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    /// Whether a record at `site` passes this filter
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(name) => name == site,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteFilter::All)
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => write!(f, "{}", Self::ALL),
            SiteFilter::Site(name) => write!(f, "{}", name),
        }
    }
}

/// Inclusive payload mass range from the dashboard slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Create a range, enforcing `low <= high` within `[0, 10000]`
    pub fn new(low: f64, high: f64) -> QueryResult<Self> {
        if low > high {
            return Err(QueryError::InvertedRange { low, high });
        }
        if low < 0.0 || high > MAX_PAYLOAD_KG {
            return Err(QueryError::RangeOutOfBounds {
                low,
                high,
                max: MAX_PAYLOAD_KG,
            });
        }
        Ok(Self { low, high })
    }

    /// The full slider domain
    pub fn full() -> Self {
        Self {
            low: 0.0,
            high: MAX_PAYLOAD_KG,
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive containment check
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

impl Default for PayloadRange {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(SiteFilter::parse("ALL"), SiteFilter::All);
        assert_eq!(
            SiteFilter::parse("KSC LC-39A"),
            SiteFilter::Site("KSC LC-39A".to_string())
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(SiteFilter::All.matches("CCAFS LC-40"));

        let filter = SiteFilter::parse("CCAFS LC-40");
        assert!(filter.matches("CCAFS LC-40"));
        assert!(!filter.matches("KSC LC-39A"));
    }

    #[test]
    fn test_range_validation() {
        assert!(PayloadRange::new(0.0, 10000.0).is_ok());
        assert!(PayloadRange::new(400.0, 9600.0).is_ok());
        assert!(PayloadRange::new(500.0, 500.0).is_ok());

        assert!(matches!(
            PayloadRange::new(600.0, 500.0),
            Err(QueryError::InvertedRange { .. })
        ));
        assert!(matches!(
            PayloadRange::new(-1.0, 500.0),
            Err(QueryError::RangeOutOfBounds { .. })
        ));
        assert!(matches!(
            PayloadRange::new(0.0, 10001.0),
            Err(QueryError::RangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = PayloadRange::new(400.0, 9600.0).unwrap();
        assert!(range.contains(400.0));
        assert!(range.contains(9600.0));
        assert!(!range.contains(399.9));
        assert!(!range.contains(9600.1));
    }
}
