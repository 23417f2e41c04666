//! Launch Record Types
//!
//! A single row of the dataset: launch site, payload mass, and the binary
//! launch outcome. Rows have no identity beyond their position in the table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary launch outcome, stored as `class` in the source CSV (1 = success)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Whether this outcome counts toward success totals
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Human-readable label for chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    /// Numeric value as stored in the `class` column
    pub fn class(&self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.class()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(class: u8) -> Result<Self, Self::Error> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("Invalid outcome class: {} (expected 0 or 1)", other)),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One launch record from the dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    /// Launch site name, e.g. "CCAFS LC-40"
    pub site: String,
    /// Payload mass in kilograms
    pub payload_mass_kg: f64,
    /// Launch outcome
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn new(site: impl Into<String>, payload_mass_kg: f64, outcome: Outcome) -> Self {
        Self {
            site: site.into(),
            payload_mass_kg,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::try_from(1).unwrap(), Outcome::Success);
        assert_eq!(Outcome::try_from(0).unwrap(), Outcome::Failure);
        assert!(Outcome::try_from(2).is_err());
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Success.label(), "Success");
        assert_eq!(Outcome::Failure.label(), "Failure");
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::Failure.is_success());
    }

    #[test]
    fn test_outcome_serde_as_class() {
        let json = serde_json::to_string(&Outcome::Success).unwrap();
        assert_eq!(json, "1");

        let outcome: Outcome = serde_json::from_str("0").unwrap();
        assert_eq!(outcome, Outcome::Failure);
    }
}
