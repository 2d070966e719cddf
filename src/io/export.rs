//! Export measurements with their calculated columns to CSV.
//!
//! The layout matches the raw input plus `diam_m` and `diam_m^2`, so the file
//! can be reopened in a spreadsheet next to the original data.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{MeasurementSet, TransformedSet};
use crate::error::AppError;

/// Write raw measurements (`diameter,length`) to a CSV file.
pub fn write_measurements_csv(path: &Path, measurements: &MeasurementSet) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create CSV '{}': {e}", path.display())))?;
    write_measurements(&mut file, measurements)
}

/// Write raw measurements (`diameter,length`) to any writer.
pub fn write_measurements<W: Write>(out: &mut W, measurements: &MeasurementSet) -> Result<(), AppError> {
    writeln!(out, "diameter,length")
        .map_err(|e| AppError::new(2, format!("Failed to write CSV header: {e}")))?;
    for m in measurements.iter() {
        writeln!(out, "{},{}", m.diameter_mm(), m.length_m())
            .map_err(|e| AppError::new(2, format!("Failed to write CSV row: {e}")))?;
    }
    Ok(())
}

/// Write transformed rows (`diameter,length,diam_m,diam_m^2`) to a CSV file.
pub fn write_transformed_csv(path: &Path, transformed: &TransformedSet) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "diameter,length,diam_m,diam_m^2")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for p in &transformed.points {
        writeln!(
            file,
            "{},{},{},{}",
            p.diameter_mm, p.length_m, p.diam_m, p.diam_m_squared
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
