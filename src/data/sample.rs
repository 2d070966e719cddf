//! Synthetic unwind measurements for a roll of known caliper.
//!
//! Diameters are spaced evenly from the core to the full roll. The length at
//! each diameter is the unrounded wound length between that diameter and the
//! core, optionally perturbed by seeded multiplicative Gaussian noise.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::{Measurement, MeasurementSet, RollGeometry, SampleOptions};
use crate::error::{AppError, RollError};
use crate::length::wound_length_m;

/// Upper bound on synthetic measurements per call.
pub const MAX_SAMPLE_COUNT: usize = 100_000;

pub fn synthesize_measurements(
    geometry: &RollGeometry,
    caliper_mm: f64,
    options: &SampleOptions,
) -> Result<MeasurementSet, AppError> {
    if options.count < 2 {
        return Err(RollError::InsufficientData(format!(
            "sample count must be at least 2, got {}",
            options.count
        ))
        .into());
    }
    if options.count > MAX_SAMPLE_COUNT {
        return Err(AppError::new(
            2,
            format!("Sample count must be at most {MAX_SAMPLE_COUNT}, got {}.", options.count),
        ));
    }
    if !(options.noise_rel.is_finite() && options.noise_rel >= 0.0) {
        return Err(AppError::new(2, "Noise level must be a non-negative number."));
    }
    // Validates geometry and caliper before any sampling.
    wound_length_m(geometry, caliper_mm)?;

    let mut rng = StdRng::seed_from_u64(options.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let core = geometry.diam_core_mm;
    let span = geometry.diam_roll_mm - core;
    let mut measurements = Vec::with_capacity(options.count);

    for i in 0..options.count {
        let u = i as f64 / (options.count as f64 - 1.0);
        let diameter_mm = core + u * span;

        let mut length_m = if i == 0 {
            0.0
        } else {
            let at = RollGeometry {
                diam_roll_mm: diameter_mm,
                diam_core_mm: core,
            };
            wound_length_m(&at, caliper_mm)?
        };

        if options.noise_rel > 0.0 {
            let z: f64 = normal.sample(&mut rng);
            length_m = (length_m * (1.0 + options.noise_rel * z)).max(0.0);
        }

        measurements.push(Measurement::new(diameter_mm, length_m)?);
    }

    Ok(MeasurementSet::new(measurements)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caliper::estimate_caliper;
    use crate::length::calculate_length;

    #[test]
    fn caliper_round_trips_through_length() {
        let geometry = RollGeometry::new(120.5, 43.2).unwrap();
        let caliper = 0.47;

        let length = calculate_length(&geometry, caliper).unwrap();
        assert_eq!(length, 21.1);

        let set = synthesize_measurements(&geometry, caliper, &SampleOptions::default()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0].length_m(), 0.0);
        assert!((set.as_slice()[1].length_m() - length).abs() < 0.05);

        let recovered = estimate_caliper(&set).unwrap();
        assert!((recovered - caliper).abs() < 1e-4, "recovered {recovered}");
    }

    #[test]
    fn many_points_recover_caliper() {
        let geometry = RollGeometry::new(150.0, 76.0).unwrap();
        let options = SampleOptions {
            count: 25,
            ..SampleOptions::default()
        };
        let set = synthesize_measurements(&geometry, 0.1234, &options).unwrap();
        assert_eq!(set.len(), 25);
        assert_eq!(set.as_slice()[24].diameter_mm(), 150.0);
        assert!((estimate_caliper(&set).unwrap() - 0.1234).abs() < 1e-4);
    }

    #[test]
    fn noise_is_seeded() {
        let geometry = RollGeometry::new(120.0, 40.0).unwrap();
        let options = SampleOptions {
            count: 10,
            noise_rel: 0.02,
            seed: 7,
        };
        let a = synthesize_measurements(&geometry, 0.5, &options).unwrap();
        let b = synthesize_measurements(&geometry, 0.5, &options).unwrap();
        assert_eq!(a, b);

        let clean = synthesize_measurements(
            &geometry,
            0.5,
            &SampleOptions {
                noise_rel: 0.0,
                ..options
            },
        )
        .unwrap();
        assert_ne!(a, clean);
        assert!(a.iter().all(|m| m.length_m() >= 0.0));
    }

    #[test]
    fn rejects_bad_inputs() {
        let geometry = RollGeometry::new(120.0, 40.0).unwrap();
        let one = SampleOptions {
            count: 1,
            ..SampleOptions::default()
        };
        assert_eq!(synthesize_measurements(&geometry, 0.5, &one).unwrap_err().exit_code(), 3);

        let flat = RollGeometry {
            diam_roll_mm: 40.0,
            diam_core_mm: 40.0,
        };
        let err = synthesize_measurements(&flat, 0.5, &SampleOptions::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let err = synthesize_measurements(&geometry, 0.0, &SampleOptions::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let huge = SampleOptions {
            count: usize::MAX,
            ..SampleOptions::default()
        };
        let err = synthesize_measurements(&geometry, 0.5, &huge).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("at most"));
    }
}
