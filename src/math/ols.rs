//! Closed-form simple linear regression.
//!
//! Fits `y = intercept + slope * x` by ordinary least squares:
//!
//! ```text
//! slope     = Σ (x_i - x̄)(y_i - ȳ) / Σ (x_i - x̄)^2
//! intercept = ȳ - slope * x̄
//! R²        = 1 - SS_res / SS_tot
//! ```
//!
//! No weighting and no outlier handling. With exactly two distinct points the
//! line passes through both and R² is 1 up to rounding.

use nalgebra::DVector;

use crate::domain::LinearFitResult;
use crate::error::RollError;

/// Fit a straight line through `(x, y)` pairs.
///
/// Fails with `InsufficientData` when the slices differ in length, hold fewer
/// than two points, or contain fewer than two distinct x-values.
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LinearFitResult, RollError> {
    if x.len() != y.len() {
        return Err(RollError::InsufficientData(format!(
            "x has {} values but y has {}",
            x.len(),
            y.len()
        )));
    }
    let n = x.len();
    if n < 2 {
        return Err(RollError::InsufficientData(format!(
            "need at least 2 points for a line fit, got {n}"
        )));
    }
    if x.iter().all(|&v| v == x[0]) {
        return Err(RollError::InsufficientData(
            "need at least 2 distinct x-values for a line fit".to_string(),
        ));
    }

    let x = DVector::from_column_slice(x);
    let y = DVector::from_column_slice(y);

    let x_mean = x.mean();
    let y_mean = y.mean();
    let dx = x.add_scalar(-x_mean);
    let dy = y.add_scalar(-y_mean);

    let sxx = dx.dot(&dx);
    if !(sxx.is_finite() && sxx > 0.0) {
        return Err(RollError::InsufficientData(
            "x-values have no usable spread".to_string(),
        ));
    }
    let slope = dx.dot(&dy) / sxx;
    let intercept = y_mean - slope * x_mean;

    let fitted = (&x * slope).add_scalar(intercept);
    let ss_res = (&y - fitted).norm_squared();
    let ss_tot = dy.norm_squared();

    // Constant y: a flat line is a perfect fit, anything else explains nothing.
    let r_squared = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else if ss_res == 0.0 {
        1.0
    } else {
        0.0
    };

    Ok(LinearFitResult {
        slope,
        intercept,
        r_squared,
        n,
    })
}
