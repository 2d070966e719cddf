//! Synthetic unwind data for checking the caliper fit against a known answer.

pub mod sample;

pub use sample::*;
