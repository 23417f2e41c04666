//! Query error types

use thiserror::Error;

/// Errors that can occur while building a chart query
///
/// Empty result sets are never errors; only structurally invalid inputs
/// (an inverted or out-of-bounds payload range) are rejected.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Range low end exceeds the high end
    #[error("Invalid payload range: low {low} exceeds high {high}")]
    InvertedRange { low: f64, high: f64 },

    /// Range falls outside the slider's domain
    #[error("Payload range [{low}, {high}] is outside [0, {max}]")]
    RangeOutOfBounds { low: f64, high: f64, max: f64 },
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
