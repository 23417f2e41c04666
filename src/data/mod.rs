//! Launch Dataset
//!
//! The in-memory launch records table and its CSV loader.
//!
//! The dataset is loaded once at startup and is immutable for the process
//! lifetime. All chart queries read from a shared [`LaunchTable`].
//!
//! # Example
//!
//! ```rust,ignore
//! use launchboard::data::load_csv;
//!
//! let result = load_csv(std::path::Path::new("data/spacex_launch_dash.csv"))?;
//! println!("{} launches across {} sites", result.table.len(), result.table.sites().len());
//! ```

mod error;
mod record;
mod table;

pub use error::{DataError, DataResult};
pub use record::{LaunchRecord, Outcome};
pub use table::{load_csv, CsvLoadResult, LaunchTable};
