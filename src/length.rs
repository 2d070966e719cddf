//! Roll length from caliper and roll geometry.
//!
//! The annulus between roll and core holds the whole wound ribbon, so
//! `length · caliper = π (D_roll² - D_core²) / 4` with everything in metres.

use crate::domain::{MM_PER_M, RollGeometry};
use crate::error::RollError;
use crate::math::round_to;

/// Decimal places the roll length (m) is reported to.
pub const LENGTH_DECIMALS: usize = 1;

/// Unrounded wound length in metres.
pub fn wound_length_m(geometry: &RollGeometry, caliper_mm: f64) -> Result<f64, RollError> {
    geometry.validate()?;
    if !(caliper_mm.is_finite() && caliper_mm > 0.0) {
        return Err(RollError::DegenerateCaliper { caliper_mm });
    }

    let numerator = std::f64::consts::PI
        * ((geometry.diam_roll_mm / MM_PER_M).powi(2) - (geometry.diam_core_mm / MM_PER_M).powi(2));
    let denom = 4.0 * (caliper_mm / MM_PER_M);
    let length = numerator / denom;
    // A vanishingly thin caliper overflows the length.
    if !length.is_finite() {
        return Err(RollError::DegenerateCaliper { caliper_mm });
    }
    Ok(length)
}

/// Roll length in metres, rounded to 1 decimal.
pub fn calculate_length(geometry: &RollGeometry, caliper_mm: f64) -> Result<f64, RollError> {
    wound_length_m(geometry, caliper_mm).map(|length| round_to(length, LENGTH_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_for_reference_roll() {
        let geometry = RollGeometry::new(120.5, 43.2).unwrap();
        assert_eq!(calculate_length(&geometry, 0.47).unwrap(), 21.1);
    }

    #[test]
    fn rejects_roll_not_larger_than_core() {
        for (roll, core) in [(43.2, 43.2), (40.0, 43.2)] {
            let geometry = RollGeometry {
                diam_roll_mm: roll,
                diam_core_mm: core,
            };
            assert!(matches!(
                calculate_length(&geometry, 0.47),
                Err(RollError::InvalidGeometry { .. })
            ));
        }
    }

    #[test]
    fn rejects_non_positive_caliper() {
        let geometry = RollGeometry::new(120.5, 43.2).unwrap();
        for caliper in [0.0, -0.47, f64::NAN] {
            assert!(matches!(
                calculate_length(&geometry, caliper),
                Err(RollError::DegenerateCaliper { .. })
            ));
        }
    }

    #[test]
    fn caliper_too_thin_to_give_finite_length() {
        let geometry = RollGeometry::new(120.5, 43.2).unwrap();
        assert!(matches!(
            wound_length_m(&geometry, 1e-320),
            Err(RollError::DegenerateCaliper { .. })
        ));
        assert!(matches!(
            calculate_length(&geometry, 1e-320),
            Err(RollError::DegenerateCaliper { .. })
        ));
    }

    #[test]
    fn thinner_material_winds_longer() {
        let geometry = RollGeometry::new(120.0, 40.0).unwrap();
        let thick = wound_length_m(&geometry, 0.5).unwrap();
        let thin = wound_length_m(&geometry, 0.25).unwrap();
        assert!((thin - 2.0 * thick).abs() < 1e-9);
    }
}
