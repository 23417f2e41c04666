//! Chart Queries
//!
//! The two stateless queries behind the dashboard charts:
//!
//! - **Success counts**: per-site success totals (all sites), or per-outcome
//!   counts for a single site - feeds the pie chart.
//! - **Payload scatter**: launch records within an inclusive payload mass
//!   range, optionally restricted to one site - feeds the scatter chart.
//!
//! Both read from a shared [`LaunchTable`](crate::data::LaunchTable) and have
//! no side effects. Unknown sites and empty results are legal, not errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use launchboard::query::{payload_scatter, success_counts, PayloadRange, SiteFilter};
//!
//! let counts = success_counts(&table, &SiteFilter::All);
//! let range = PayloadRange::new(0.0, 10000.0)?;
//! let points = payload_scatter(&table, &SiteFilter::All, &range);
//! ```

mod charts;
mod error;
mod filter;

pub use charts::{payload_scatter, success_counts, CategoryCount, ScatterPoint};
pub use error::{QueryError, QueryResult};
pub use filter::{PayloadRange, SiteFilter, MAX_PAYLOAD_KG};
