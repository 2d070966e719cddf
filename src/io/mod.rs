//! Input/output helpers.
//!
//! - measurement ingest from CSV or memory (`ingest`)
//! - calculated-column CSV export (`export`)
//! - caliper estimate JSON read/write (`estimate`)

pub mod estimate;
pub mod export;
pub mod ingest;

pub use estimate::*;
pub use export::*;
pub use ingest::*;
