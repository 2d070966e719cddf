//! Shared calculation pipelines used by the CLI handlers.
//!
//! Each function takes a config struct, runs ingest -> calculation, and returns
//! everything the front end needs to print, plot, or export.

use log::info;

use crate::caliper;
use crate::data::synthesize_measurements;
use crate::domain::{
    CaliperConfig, CaliperEstimate, CaliperSource, LengthConfig, MeasurementSet, SynthConfig,
};
use crate::error::AppError;
use crate::io::estimate::read_estimate_json;
use crate::io::ingest::{ColumnNames, CsvSource, IngestedData, MeasurementSource};
use crate::length::calculate_length;

/// All computed outputs of a single `roll caliper` run.
#[derive(Debug, Clone)]
pub struct CaliperRun {
    pub ingest: IngestedData,
    pub estimate: CaliperEstimate,
}

/// Outputs of a `roll length` run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthRun {
    pub caliper_mm: f64,
    pub length_m: f64,
}

/// Read the configured CSV and estimate caliper.
pub fn run_caliper(config: &CaliperConfig) -> Result<CaliperRun, AppError> {
    let source = CsvSource::new(
        &config.input,
        ColumnNames {
            diameter: config.diameter_column.clone(),
            length: config.length_column.clone(),
        },
    );
    run_caliper_with_source(&source)
}

/// Estimate caliper from any measurement source.
pub fn run_caliper_with_source(source: &dyn MeasurementSource) -> Result<CaliperRun, AppError> {
    let ingest = source.read_measurements()?;
    let estimate = caliper::estimate(&ingest.measurements)?;
    info!(
        "caliper {:.4} mm from {} points (r2={:.6})",
        estimate.caliper_mm, estimate.fit.n, estimate.fit.r_squared
    );
    Ok(CaliperRun { ingest, estimate })
}

/// Resolve the caliper and compute roll length.
pub fn run_length(config: &LengthConfig) -> Result<LengthRun, AppError> {
    let caliper_mm = match &config.caliper {
        CaliperSource::Value(v) => *v,
        CaliperSource::EstimateFile(path) => {
            let record = read_estimate_json(path)?;
            info!("caliper {:.4} mm from {}", record.caliper_mm, path.display());
            record.caliper_mm
        }
    };
    let length_m = calculate_length(&config.geometry, caliper_mm)?;
    Ok(LengthRun {
        caliper_mm,
        length_m,
    })
}

/// Generate synthetic measurements.
pub fn run_synth(config: &SynthConfig) -> Result<MeasurementSet, AppError> {
    synthesize_measurements(&config.geometry, config.caliper_mm, &config.options)
}
