//! Measurement ingest.
//!
//! A `MeasurementSource` turns some tabular input into a validated
//! `MeasurementSet`. Two sources are provided:
//!
//! - `CsvSource`: a CSV file with (at least) a diameter and a length column
//! - `InMemorySource`: `(diameter_mm, length_m)` pairs already in memory
//!
//! Rows that cannot be parsed or violate the measurement invariants are skipped
//! and reported as `RowError`s. Fewer than two usable rows is an error.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use csv::StringRecord;
use log::{info, warn};

use crate::domain::{Measurement, MeasurementSet};
use crate::error::AppError;

pub const DEFAULT_DIAMETER_COLUMN: &str = "diameter";
pub const DEFAULT_LENGTH_COLUMN: &str = "length";

/// Anything that can supply unwind measurements.
pub trait MeasurementSource {
    fn read_measurements(&self) -> Result<IngestedData, AppError>;
}

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: validated measurements + what was skipped.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub measurements: MeasurementSet,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Column names to read from a CSV header (matched case-insensitively).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub diameter: String,
    pub length: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_DIAMETER_COLUMN.to_string(),
            length: DEFAULT_LENGTH_COLUMN.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsvSource {
    pub path: PathBuf,
    pub columns: ColumnNames,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, columns: ColumnNames) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }
}

impl MeasurementSource for CsvSource {
    fn read_measurements(&self) -> Result<IngestedData, AppError> {
        let file = File::open(&self.path).map_err(|e| {
            AppError::new(2, format!("Failed to open CSV '{}': {e}", self.path.display()))
        })?;
        info!("reading measurements from {}", self.path.display());
        read_csv(file, &self.columns)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub pairs: Vec<(f64, f64)>,
}

impl InMemorySource {
    pub fn new(pairs: Vec<(f64, f64)>) -> Self {
        Self { pairs }
    }
}

impl MeasurementSource for InMemorySource {
    fn read_measurements(&self) -> Result<IngestedData, AppError> {
        let mut measurements = Vec::with_capacity(self.pairs.len());
        let mut row_errors = Vec::new();

        for (idx, &(diameter_mm, length_m)) in self.pairs.iter().enumerate() {
            match Measurement::new(diameter_mm, length_m) {
                Ok(m) => measurements.push(m),
                Err(e) => row_errors.push(RowError {
                    line: idx + 1,
                    message: e.to_string(),
                }),
            }
        }

        finish(measurements, row_errors, self.pairs.len())
    }
}

/// Read measurements from any CSV reader.
pub fn read_csv<R: Read>(reader: R, columns: &ColumnNames) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let diameter_idx = column_index(&header_map, &columns.diameter)?;
    let length_idx = column_index(&header_map, &columns.length)?;

    let mut measurements = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Line 1 is the header.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, diameter_idx, length_idx, columns) {
            Ok(m) => measurements.push(m),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    finish(measurements, row_errors, rows_read)
}

fn finish(
    measurements: Vec<Measurement>,
    row_errors: Vec<RowError>,
    rows_read: usize,
) -> Result<IngestedData, AppError> {
    for e in &row_errors {
        warn!("skipping row {}: {}", e.line, e.message);
    }
    let rows_used = measurements.len();
    info!("ingested {rows_used} of {rows_read} rows");

    let measurements = MeasurementSet::new(measurements)?;
    Ok(IngestedData {
        measurements,
        row_errors,
        rows_read,
        rows_used,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn column_index(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map
        .get(&normalize_header_name(name))
        .copied()
        .ok_or_else(|| AppError::new(2, format!("Missing required column: `{name}`")))
}

fn parse_row(
    record: &StringRecord,
    diameter_idx: usize,
    length_idx: usize,
    columns: &ColumnNames,
) -> Result<Measurement, String> {
    let diameter_mm = parse_f64(record, diameter_idx, &columns.diameter)?;
    let length_m = parse_f64(record, length_idx, &columns.length)?;
    Measurement::new(diameter_mm, length_m).map_err(|e| e.to_string())
}

fn parse_f64(record: &StringRecord, idx: usize, name: &str) -> Result<f64, String> {
    let raw = record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))?;
    raw.parse::<f64>()
        .map_err(|_| format!("Invalid number '{raw}' in column `{name}`"))
}
