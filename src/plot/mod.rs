//! Terminal plots of raw and transformed unwind data.

pub mod ascii;

pub use ascii::*;
