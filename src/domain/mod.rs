//! Domain types used throughout the calculations.
//!
//! This module defines:
//!
//! - validated inputs (`Measurement`, `MeasurementSet`, `RollGeometry`)
//! - calculation outputs (`TransformedSet`, `LinearFitResult`, `CaliperEstimate`)
//! - front-end configuration (`CaliperConfig`, `LengthConfig`, `SynthConfig`)

pub mod types;

pub use types::*;
