//! Dataset Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the launch dataset
#[derive(Error, Debug)]
pub enum DataError {
    /// Failed to open or read the dataset file
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing failed at the file level
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// The file parsed but contained no usable rows
    #[error("Dataset contains no launch records")]
    Empty,
}

/// Result type for dataset operations
pub type DataResult<T> = Result<T, DataError>;
