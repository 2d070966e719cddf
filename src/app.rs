//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults
//! - parses CLI arguments into config structs
//! - runs the caliper / length / synth pipelines
//! - prints reports/plots and writes optional exports

use clap::Parser;
use log::info;

use crate::cli::{CaliperArgs, Command, LengthArgs, SynthArgs};
use crate::domain::{
    CaliperConfig, CaliperSource, LengthConfig, RollGeometry, SampleOptions, SynthConfig,
};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `roll` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Caliper(args) => handle_caliper(&caliper_config_from_args(&args)),
        Command::Length(args) => handle_length(&length_config_from_args(&args)),
        Command::Synth(args) => handle_synth(&synth_config_from_args(&args)?),
    }
}

fn handle_caliper(config: &CaliperConfig) -> Result<(), AppError> {
    let run = pipeline::run_caliper(config)?;
    let source = config.input.display().to_string();

    println!(
        "{}",
        crate::report::format_caliper_summary(&source, &run.ingest, &run.estimate)
    );

    if config.plot {
        println!(
            "{}",
            crate::plot::render_raw_plot(&run.ingest.measurements, config.plot_width, config.plot_height)
        );
        println!(
            "{}",
            crate::plot::render_transformed_plot(
                &run.estimate.transformed,
                Some(&run.estimate.fit),
                config.plot_width,
                config.plot_height,
            )
        );
    }

    // Optional exports.
    if let Some(path) = &config.export_transformed {
        crate::io::export::write_transformed_csv(path, &run.estimate.transformed)?;
        info!("wrote calculated columns to {}", path.display());
    }
    if let Some(path) = &config.export_estimate {
        let record = crate::io::estimate::estimate_file(&run.estimate, &source);
        crate::io::estimate::write_estimate_json(path, &record)?;
        info!("wrote estimate to {}", path.display());
    }

    Ok(())
}

fn handle_length(config: &LengthConfig) -> Result<(), AppError> {
    let run = pipeline::run_length(config)?;
    println!(
        "{}",
        crate::report::format_length_summary(&config.geometry, run.caliper_mm, run.length_m)
    );
    Ok(())
}

fn handle_synth(config: &SynthConfig) -> Result<(), AppError> {
    let measurements = pipeline::run_synth(config)?;
    match &config.output {
        Some(path) => {
            crate::io::export::write_measurements_csv(path, &measurements)?;
            info!("wrote {} measurements to {}", measurements.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            crate::io::export::write_measurements(&mut stdout, &measurements)?;
        }
    }
    Ok(())
}

pub fn caliper_config_from_args(args: &CaliperArgs) -> CaliperConfig {
    CaliperConfig {
        input: args.input.clone(),
        diameter_column: args.diameter_column.clone(),
        length_column: args.length_column.clone(),
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
        export_transformed: args.export_transformed.clone(),
        export_estimate: args.export_estimate.clone(),
    }
}

/// Geometry is validated later by the length calculation so its error kind is preserved.
pub fn length_config_from_args(args: &LengthArgs) -> LengthConfig {
    let caliper = match (&args.estimate, args.caliper) {
        (Some(path), _) => CaliperSource::EstimateFile(path.clone()),
        (None, Some(v)) => CaliperSource::Value(v),
        // clap requires one of the two; treat absence as an unusable caliper.
        (None, None) => CaliperSource::Value(f64::NAN),
    };
    LengthConfig {
        geometry: RollGeometry {
            diam_roll_mm: args.diam_roll,
            diam_core_mm: args.diam_core,
        },
        caliper,
    }
}

pub fn synth_config_from_args(args: &SynthArgs) -> Result<SynthConfig, AppError> {
    Ok(SynthConfig {
        geometry: RollGeometry::new(args.diam_roll, args.diam_core)?,
        caliper_mm: args.caliper,
        options: SampleOptions {
            count: args.count,
            noise_rel: args.noise,
            seed: args.seed,
        },
        output: args.output.clone(),
    })
}
