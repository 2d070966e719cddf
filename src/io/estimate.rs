//! Read/write caliper estimate JSON files.
//!
//! An estimate file records the fit and the resulting caliper so a later
//! `roll length --estimate` run can reuse it. The schema is `domain::EstimateFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{CaliperEstimate, EstimateFile};
use crate::error::AppError;

pub const TOOL_NAME: &str = "roll";

/// Build the serializable record for an estimate.
pub fn estimate_file(estimate: &CaliperEstimate, source: &str) -> EstimateFile {
    EstimateFile {
        tool: TOOL_NAME.to_string(),
        generated_at: Utc::now(),
        source: source.to_string(),
        n_points: estimate.fit.n,
        fit: estimate.fit,
        caliper_mm: estimate.caliper_mm,
    }
}

/// Write an estimate JSON file.
pub fn write_estimate_json(path: &Path, record: &EstimateFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create estimate JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, record)
        .map_err(|e| AppError::new(2, format!("Failed to write estimate JSON: {e}")))?;
    Ok(())
}

/// Read an estimate JSON file.
pub fn read_estimate_json(path: &Path) -> Result<EstimateFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open estimate JSON '{}': {e}", path.display()))
    })?;
    let record: EstimateFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid estimate JSON: {e}")))?;
    Ok(record)
}
