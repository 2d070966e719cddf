//! Shared domain types.
//!
//! All of these are value objects created fresh per calculation. The
//! serializable ones (`LinearFitResult`, `RollGeometry`, `EstimateFile`) can be
//! exported to JSON and reloaded later.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RollError;

/// Millimetres per metre.
pub const MM_PER_M: f64 = 1000.0;

/// One reading taken while unwinding material from a roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    diameter_mm: f64,
    length_m: f64,
}

impl Measurement {
    /// Build a measurement, rejecting non-positive diameters and negative lengths.
    pub fn new(diameter_mm: f64, length_m: f64) -> Result<Self, RollError> {
        let invalid = |reason| RollError::InvalidMeasurement {
            diameter_mm,
            length_m,
            reason,
        };
        if !diameter_mm.is_finite() || diameter_mm <= 0.0 {
            return Err(invalid("diameter must be a positive number"));
        }
        if !length_m.is_finite() || length_m < 0.0 {
            return Err(invalid("length must be a non-negative number"));
        }
        Ok(Self {
            diameter_mm,
            length_m,
        })
    }

    pub fn diameter_mm(&self) -> f64 {
        self.diameter_mm
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }
}

/// An ordered set of at least two measurements with at least two distinct diameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSet {
    measurements: Vec<Measurement>,
}

impl MeasurementSet {
    pub fn new(measurements: Vec<Measurement>) -> Result<Self, RollError> {
        if measurements.len() < 2 {
            return Err(RollError::InsufficientData(format!(
                "need at least 2 measurements, got {}",
                measurements.len()
            )));
        }
        let first = measurements[0].diameter_mm;
        if measurements.iter().all(|m| m.diameter_mm == first) {
            return Err(RollError::InsufficientData(format!(
                "all {} measurements share diameter {first} mm",
                measurements.len()
            )));
        }
        Ok(Self { measurements })
    }

    /// Build a set from `(diameter_mm, length_m)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, RollError> {
        let measurements = pairs
            .iter()
            .map(|&(d, l)| Measurement::new(d, l))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(measurements)
    }

    pub fn as_slice(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.measurements.iter()
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Always false; kept alongside `len` for the usual slice-like API.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

/// A measurement with its calculated columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformedPoint {
    pub diameter_mm: f64,
    pub diam_m: f64,
    pub diam_m_squared: f64,
    pub length_m: f64,
}

/// The `(diameter², length)` series that the caliper fit runs on.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedSet {
    pub points: Vec<TransformedPoint>,
}

impl TransformedSet {
    /// Regressor values (`diam_m^2`).
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.diam_m_squared).collect()
    }

    /// Response values (`length`).
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.length_m).collect()
    }
}

/// Result of a straight-line least-squares fit `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFitResult {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub n: usize,
}

impl LinearFitResult {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Physical description of a wound roll. Diameters in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollGeometry {
    pub diam_roll_mm: f64,
    pub diam_core_mm: f64,
}

impl RollGeometry {
    pub fn new(diam_roll_mm: f64, diam_core_mm: f64) -> Result<Self, RollError> {
        let geometry = Self {
            diam_roll_mm,
            diam_core_mm,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Check that both diameters are positive and the roll is strictly larger than the core.
    pub fn validate(&self) -> Result<(), RollError> {
        let ok = self.diam_roll_mm.is_finite()
            && self.diam_core_mm.is_finite()
            && self.diam_core_mm > 0.0
            && self.diam_roll_mm > self.diam_core_mm;
        if ok {
            Ok(())
        } else {
            Err(RollError::InvalidGeometry {
                diam_roll_mm: self.diam_roll_mm,
                diam_core_mm: self.diam_core_mm,
            })
        }
    }
}

/// Every stage of a caliper estimate, kept for reporting and plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct CaliperEstimate {
    pub transformed: TransformedSet,
    pub fit: LinearFitResult,
    pub caliper_mm: f64,
}

/// Configuration for `roll caliper`, derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct CaliperConfig {
    pub input: PathBuf,
    pub diameter_column: String,
    pub length_column: String,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_transformed: Option<PathBuf>,
    pub export_estimate: Option<PathBuf>,
}

/// Where `roll length` takes its caliper from.
#[derive(Debug, Clone, PartialEq)]
pub enum CaliperSource {
    Value(f64),
    EstimateFile(PathBuf),
}

/// Configuration for `roll length`.
#[derive(Debug, Clone)]
pub struct LengthConfig {
    pub geometry: RollGeometry,
    pub caliper: CaliperSource,
}

/// Controls for synthetic measurement generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleOptions {
    /// Number of measurements, evenly spaced in diameter from core to roll.
    pub count: usize,
    /// Relative standard deviation of multiplicative length noise (0 disables noise).
    pub noise_rel: f64,
    pub seed: u64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            count: 2,
            noise_rel: 0.0,
            seed: 42,
        }
    }
}

/// Configuration for `roll synth`.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    pub geometry: RollGeometry,
    pub caliper_mm: f64,
    pub options: SampleOptions,
    pub output: Option<PathBuf>,
}

/// A saved caliper estimate (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub n_points: usize,
    pub fit: LinearFitResult,
    pub caliper_mm: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_rejects_bad_values() {
        assert!(Measurement::new(0.0, 1.0).is_err());
        assert!(Measurement::new(-5.0, 1.0).is_err());
        assert!(Measurement::new(f64::NAN, 1.0).is_err());
        assert!(Measurement::new(40.0, -0.1).is_err());
        assert!(Measurement::new(40.0, 0.0).is_ok());
    }

    #[test]
    fn single_row_set_is_insufficient() {
        let err = MeasurementSet::from_pairs(&[(40.0, 0.0)]).unwrap_err();
        assert!(matches!(err, RollError::InsufficientData(_)));
    }

    #[test]
    fn identical_diameters_are_insufficient() {
        let err = MeasurementSet::from_pairs(&[(80.0, 1.0), (80.0, 2.0), (80.0, 3.0)]).unwrap_err();
        assert!(matches!(err, RollError::InsufficientData(_)));
    }

    #[test]
    fn geometry_requires_roll_larger_than_core() {
        assert!(RollGeometry::new(120.5, 43.2).is_ok());
        for (roll, core) in [(43.2, 43.2), (40.0, 43.2), (120.0, 0.0), (f64::INFINITY, 40.0)] {
            let err = RollGeometry::new(roll, core).unwrap_err();
            assert!(matches!(err, RollError::InvalidGeometry { .. }), "{roll}/{core}");
        }
    }
}
