//! Caliper estimation from unwind measurements.
//!
//! The wound length remaining on a roll grows with the annulus area, so length
//! is linear in diameter squared:
//!
//! ```text
//! length = π / (4 · caliper) · d² + intercept
//! ```
//!
//! Each stage is a pure function taking the previous stage's output:
//! `transform` -> `fit` -> `calculate_caliper`. `estimate_caliper` chains them.

use log::debug;

use crate::domain::{
    CaliperEstimate, LinearFitResult, MeasurementSet, MM_PER_M, TransformedPoint, TransformedSet,
};
use crate::error::RollError;
use crate::math::{fit_line, round_to};

/// Decimal places the caliper (mm) is reported to.
pub const CALIPER_DECIMALS: usize = 4;

/// Add the `diam_m` and `diam_m^2` columns to each measurement.
pub fn transform(measurements: &MeasurementSet) -> TransformedSet {
    let points = measurements
        .iter()
        .map(|m| {
            let diam_m = m.diameter_mm() / MM_PER_M;
            TransformedPoint {
                diameter_mm: m.diameter_mm(),
                diam_m,
                diam_m_squared: diam_m.powi(2),
                length_m: m.length_m(),
            }
        })
        .collect();
    TransformedSet { points }
}

/// Regress length on diameter squared.
pub fn fit(transformed: &TransformedSet) -> Result<LinearFitResult, RollError> {
    let result = fit_line(&transformed.xs(), &transformed.ys())?;
    debug!(
        "fit n={} slope={} intercept={} r2={}",
        result.n, result.slope, result.intercept, result.r_squared
    );
    Ok(result)
}

/// Caliper in millimetres from the fitted slope, rounded to 4 decimals.
pub fn calculate_caliper(fit: &LinearFitResult) -> Result<f64, RollError> {
    let slope = fit.slope;
    if slope == 0.0 || !slope.is_finite() {
        return Err(RollError::DegenerateSlope { slope });
    }
    let caliper_mm = std::f64::consts::PI / (4.0 * slope) * MM_PER_M;
    // Subnormal slopes overflow the caliper.
    if !caliper_mm.is_finite() {
        return Err(RollError::DegenerateSlope { slope });
    }
    Ok(round_to(caliper_mm, CALIPER_DECIMALS))
}

/// Run the full pipeline and keep every intermediate stage.
pub fn estimate(measurements: &MeasurementSet) -> Result<CaliperEstimate, RollError> {
    let transformed = transform(measurements);
    let fit = fit(&transformed)?;
    let caliper_mm = calculate_caliper(&fit)?;
    Ok(CaliperEstimate {
        transformed,
        fit,
        caliper_mm,
    })
}

/// Caliper (mm) for a set of unwind measurements.
pub fn estimate_caliper(measurements: &MeasurementSet) -> Result<f64, RollError> {
    estimate(measurements).map(|e| e.caliper_mm)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 20 m roll of tissue, 120 mm across on a 40 mm core.
    fn two_point_set() -> MeasurementSet {
        MeasurementSet::from_pairs(&[(40.0, 0.0), (120.0, 20.0)]).unwrap()
    }

    #[test]
    fn transform_adds_metre_and_squared_columns() {
        let t = transform(&two_point_set());
        assert_eq!(t.points.len(), 2);

        let p = t.points[1];
        assert_eq!(p.diameter_mm, 120.0);
        assert!((p.diam_m - 0.120).abs() < 1e-12);
        assert!((p.diam_m_squared - 0.0144).abs() < 1e-12);
        assert_eq!(p.length_m, 20.0);

        assert!((t.points[0].diam_m_squared - 0.0016).abs() < 1e-12);
    }

    #[test]
    fn two_point_fit_is_exact() {
        let t = transform(&two_point_set());
        let f = fit(&t).unwrap();

        let x = t.xs();
        let y = t.ys();
        let expected_slope = (y[1] - y[0]) / (x[1] - x[0]);
        let expected_intercept = y[0] - expected_slope * x[0];

        assert!((f.slope - expected_slope).abs() < 1e-9);
        assert!((f.slope - 1562.5).abs() < 1e-9);
        assert!((f.intercept - expected_intercept).abs() < 1e-9);
        assert!((f.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn caliper_from_two_point_dataset() {
        assert_eq!(estimate_caliper(&two_point_set()).unwrap(), 0.5027);
    }

    #[test]
    fn zero_or_non_finite_slope_is_degenerate() {
        for slope in [0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let f = LinearFitResult {
                slope,
                intercept: 0.0,
                r_squared: 1.0,
                n: 2,
            };
            assert!(matches!(
                calculate_caliper(&f),
                Err(RollError::DegenerateSlope { .. })
            ));
        }
    }

    #[test]
    fn tiny_slope_overflowing_caliper_is_degenerate() {
        let f = LinearFitResult {
            slope: 1e-320,
            intercept: 0.0,
            r_squared: 1.0,
            n: 2,
        };
        assert!(matches!(
            calculate_caliper(&f),
            Err(RollError::DegenerateSlope { .. })
        ));

        let set = MeasurementSet::from_pairs(&[(40.0, 0.0), (120.0, 1e-308)]).unwrap();
        assert!(matches!(
            estimate_caliper(&set),
            Err(RollError::DegenerateSlope { .. })
        ));
    }

    #[test]
    fn flat_lengths_fail_with_degenerate_slope() {
        let set = MeasurementSet::from_pairs(&[(40.0, 5.0), (80.0, 5.0), (120.0, 5.0)]).unwrap();
        assert!(matches!(
            estimate_caliper(&set),
            Err(RollError::DegenerateSlope { .. })
        ));
    }

    #[test]
    fn estimate_keeps_all_stages() {
        let set = MeasurementSet::from_pairs(&[(40.0, 0.0), (80.0, 8.0), (120.0, 20.0)]).unwrap();
        let e = estimate(&set).unwrap();
        assert_eq!(e.transformed.points.len(), 3);
        assert_eq!(e.fit.n, 3);
        assert!(e.fit.r_squared > 0.99);
        assert_eq!(e.caliper_mm, calculate_caliper(&e.fit).unwrap());
    }
}
