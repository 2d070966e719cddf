//! Command-line parsing for the roll caliper/length tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! calculation code. Defaults for a few options can come from the environment
//! (or a `.env` file loaded by `app::run`).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::io::ingest::{DEFAULT_DIAMETER_COLUMN, DEFAULT_LENGTH_COLUMN};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "roll", version, about = "Roll caliper and length calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate caliper from a CSV of unwind measurements (diameter mm, length m).
    Caliper(CaliperArgs),
    /// Calculate roll length from caliper and roll/core diameters.
    Length(LengthArgs),
    /// Generate synthetic unwind measurements for a known caliper.
    Synth(SynthArgs),
}

#[derive(Debug, Args, Clone)]
pub struct CaliperArgs {
    /// CSV file with diameter (mm) and length (m) columns.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Name of the diameter column.
    #[arg(long, env = "ROLL_DIAMETER_COLUMN", default_value = DEFAULT_DIAMETER_COLUMN)]
    pub diameter_column: String,

    /// Name of the length column.
    #[arg(long, env = "ROLL_LENGTH_COLUMN", default_value = DEFAULT_LENGTH_COLUMN)]
    pub length_column: String,

    /// Render raw and transformed ASCII plots.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, env = "ROLL_PLOT_WIDTH", default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, env = "ROLL_PLOT_HEIGHT", default_value_t = 20)]
    pub height: usize,

    /// Write measurements with calculated columns (diam_m, diam_m^2) to CSV.
    #[arg(long, value_name = "CSV")]
    pub export_transformed: Option<PathBuf>,

    /// Write the fit and caliper to JSON.
    #[arg(long, value_name = "JSON")]
    pub export_estimate: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct LengthArgs {
    /// Outer roll diameter (mm).
    #[arg(long = "roll", value_name = "MM")]
    pub diam_roll: f64,

    /// Core diameter (mm).
    #[arg(long = "core", value_name = "MM")]
    pub diam_core: f64,

    /// Material caliper (mm).
    #[arg(long, value_name = "MM", conflicts_with = "estimate", required_unless_present = "estimate")]
    pub caliper: Option<f64>,

    /// Take the caliper from an estimate JSON written by `roll caliper --export-estimate`.
    #[arg(long, value_name = "JSON")]
    pub estimate: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct SynthArgs {
    /// Outer roll diameter (mm).
    #[arg(long = "roll", value_name = "MM")]
    pub diam_roll: f64,

    /// Core diameter (mm).
    #[arg(long = "core", value_name = "MM")]
    pub diam_core: f64,

    /// Material caliper (mm).
    #[arg(long, value_name = "MM")]
    pub caliper: f64,

    /// Number of measurements.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Relative standard deviation of length noise (0 = exact).
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed for noise.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Write to CSV instead of stdout.
    #[arg(short, long, value_name = "CSV")]
    pub output: Option<PathBuf>,
}
