//! Numeric helpers: simple least squares and fixed-decimal rounding.

pub mod ols;
pub mod round;

pub use ols::*;
pub use round::*;
