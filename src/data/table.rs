//! Launch Table
//!
//! Immutable in-memory table of launch records plus the CSV loader that
//! builds it. Column selection is by header name, so extra columns in the
//! source file are ignored.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{DataError, DataResult};
use super::record::{LaunchRecord, Outcome};

/// Required CSV columns, by header name
const COLUMN_SITE: &str = "Launch Site";
const COLUMN_PAYLOAD: &str = "Payload Mass (kg)";
const COLUMN_CLASS: &str = "class";

/// Raw CSV row, mapped by header name
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
}

/// The loaded launch dataset, immutable for the process lifetime
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    /// Distinct site names in first-seen order
    sites: Vec<String>,
}

/// Result of a CSV load operation
#[derive(Debug)]
pub struct CsvLoadResult {
    pub table: LaunchTable,
    pub rows_loaded: usize,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

impl LaunchTable {
    /// Build a table from records, computing the site list in first-seen order
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
        }
        Self { records, sites }
    }

    /// All records in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct site names in first-seen order
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Minimum and maximum payload mass over all records
    ///
    /// Used for the dashboard slider bounds. Returns (0, 0) for an empty
    /// table, which never occurs after a successful load.
    pub fn payload_bounds(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in &self.records {
            min = min.min(record.payload_mass_kg);
            max = max.max(record.payload_mass_kg);
        }
        if self.records.is_empty() {
            (0.0, 0.0)
        } else {
            (min, max)
        }
    }

    /// Total number of successful launches
    pub fn total_successes(&self) -> u32 {
        self.records
            .iter()
            .filter(|r| r.outcome.is_success())
            .count() as u32
    }
}

/// Load the launch dataset from a CSV file
pub fn load_csv(path: &Path) -> DataResult<CsvLoadResult> {
    let file = File::open(path).map_err(|e| DataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_csv_reader(file)
}

/// Load the launch dataset from any CSV reader
///
/// Malformed rows are collected as errors, not fatal; the load only fails
/// when a required column is missing or no row could be read at all.
pub fn load_csv_reader<R: Read>(reader: R) -> DataResult<CsvLoadResult> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // Verify required columns before touching any rows
    let headers = csv_reader.headers()?.clone();
    for required in [COLUMN_SITE, COLUMN_PAYLOAD, COLUMN_CLASS] {
        if !headers.iter().any(|h| h == required) {
            return Err(DataError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    let mut rows_failed = 0;
    let mut errors = Vec::new();

    for (line_num, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        // Header occupies line 1
        let actual_line = line_num + 2;

        let raw = match result {
            Ok(r) => r,
            Err(e) => {
                errors.push(format!("Line {}: {}", actual_line, e));
                rows_failed += 1;
                continue;
            }
        };

        let outcome = match Outcome::try_from(raw.class) {
            Ok(o) => o,
            Err(e) => {
                errors.push(format!("Line {}: {}", actual_line, e));
                rows_failed += 1;
                continue;
            }
        };

        records.push(LaunchRecord::new(
            raw.site.trim().to_string(),
            raw.payload_mass_kg,
            outcome,
        ));
    }

    if records.is_empty() {
        return Err(DataError::Empty);
    }

    // Truncate errors if too many
    if errors.len() > 100 {
        let total = errors.len();
        errors.truncate(100);
        errors.push(format!("... and {} more errors", total - 100));
    }

    let rows_loaded = records.len();
    Ok(CsvLoadResult {
        table: LaunchTable::from_records(records),
        rows_loaded,
        rows_failed,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS LC-40,0,0,v1.0
2,CCAFS LC-40,0,525,v1.0
3,VAFB SLC-4E,1,500,v1.1
4,KSC LC-39A,1,9600,FT
";

    #[test]
    fn test_load_from_reader() {
        let result = load_csv_reader(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(result.rows_loaded, 4);
        assert_eq!(result.rows_failed, 0);
        assert_eq!(result.table.len(), 4);
        assert_eq!(
            result.table.sites(),
            &["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
    }

    #[test]
    fn test_payload_bounds() {
        let result = load_csv_reader(SAMPLE_CSV.as_bytes()).unwrap();
        let (min, max) = result.table.payload_bounds();

        assert_eq!(min, 0.0);
        assert_eq!(max, 9600.0);
    }

    #[test]
    fn test_total_successes() {
        let result = load_csv_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(result.table.total_successes(), 2);
    }

    #[test]
    fn test_bad_rows_are_counted_not_fatal() {
        let csv_data = "\
Launch Site,Payload Mass (kg),class
CCAFS LC-40,500,1
CCAFS LC-40,not-a-number,0
KSC LC-39A,9000,7
VAFB SLC-4E,600,0
";
        let result = load_csv_reader(csv_data.as_bytes()).unwrap();

        assert_eq!(result.rows_loaded, 2);
        assert_eq!(result.rows_failed, 2);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].contains("Line 3"));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv_data = "Launch Site,class\nCCAFS LC-40,1\n";
        let err = load_csv_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("Payload Mass (kg)")));
    }

    #[test]
    fn test_empty_table_is_fatal() {
        let csv_data = "Launch Site,Payload Mass (kg),class\n";
        let err = load_csv_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Empty));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let result = load_csv(file.path()).unwrap();
        assert_eq!(result.table.len(), 4);
    }

    #[test]
    fn test_missing_file() {
        let err = load_csv(Path::new("/nonexistent/launches.csv")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
