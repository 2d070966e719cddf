//! Reporting utilities: formatted terminal output for estimates and lengths.

pub mod format;

pub use format::*;
