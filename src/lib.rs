//! `roll-length` library crate.
//!
//! Estimates the caliper (thickness) of wound sheet material from unwind
//! measurements, and computes roll length from caliper and roll geometry.
//!
//! The binary (`roll`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the calculations can be used directly with in-memory data

pub mod app;
pub mod caliper;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod length;
pub mod math;
pub mod plot;
pub mod report;

pub use caliper::{calculate_caliper, estimate, estimate_caliper, fit, transform};
pub use domain::{LinearFitResult, Measurement, MeasurementSet, RollGeometry, TransformedSet};
pub use error::{AppError, RollError};
pub use length::calculate_length;
