/// Round `value` to `decimals` places after the decimal point.
///
/// Rounds the exact binary value through its decimal expansion, so `0.15`
/// (stored as `0.1499…`) rounds down to `0.1`. Large finite values come back
/// unchanged instead of overflowing.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_fixed_places() {
        assert_eq!(round_to(0.502_654_824_574_366_9, 4), 0.5027);
        assert_eq!(round_to(21.145_5, 1), 21.1);
        assert_eq!(round_to(-0.26, 1), -0.3);
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn rounds_stored_value_not_its_literal() {
        assert_eq!(round_to(0.15, 1), 0.1);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn large_values_do_not_overflow() {
        assert_eq!(round_to(1e306, 4), 1e306);
        assert_eq!(round_to(f64::MAX, 1), f64::MAX);
    }
}
