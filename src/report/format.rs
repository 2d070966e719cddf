//! Text formatting for terminal output.
//!
//! We keep formatting code in one place so:
//! - the calculation code stays clean and testable
//! - output changes are localized

use crate::domain::{CaliperEstimate, LinearFitResult, RollGeometry, TransformedSet};
use crate::io::ingest::IngestedData;

/// Format the caliper run summary (ingest stats + fit + caliper).
pub fn format_caliper_summary(source: &str, ingest: &IngestedData, estimate: &CaliperEstimate) -> String {
    let mut out = String::new();

    out.push_str("=== roll - Caliper from unwind data ===\n");
    out.push_str(&format!("Source: {source}\n"));
    out.push_str(&format!(
        "Rows: read={} used={} skipped={}\n",
        ingest.rows_read,
        ingest.rows_used,
        ingest.row_errors.len()
    ));
    for e in &ingest.row_errors {
        out.push_str(&format!("  (skipped line {}) {}\n", e.line, e.message));
    }

    out.push('\n');
    out.push_str(&format_points_table(&estimate.transformed, &estimate.fit));

    let fit = &estimate.fit;
    out.push_str("\nFit: length = slope * diam_m^2 + intercept\n");
    out.push_str(&format!("- slope    : {:.4}\n", fit.slope));
    out.push_str(&format!("- intercept: {:.4}\n", fit.intercept));
    out.push_str(&format!("- R^2      : {:.6} (n={})\n", fit.r_squared, fit.n));
    out.push_str(&format!("\nCaliper: {:.4} mm\n", estimate.caliper_mm));

    out
}

/// Format a roll length result.
pub fn format_length_summary(geometry: &RollGeometry, caliper_mm: f64, length_m: f64) -> String {
    let mut out = String::new();
    out.push_str("=== roll - Roll length ===\n");
    out.push_str(&format!("Roll diameter: {} mm\n", geometry.diam_roll_mm));
    out.push_str(&format!("Core diameter: {} mm\n", geometry.diam_core_mm));
    out.push_str(&format!("Caliper: {caliper_mm:.4} mm\n"));
    out.push_str(&format!("Length: {length_m:.1} m\n"));
    out
}

fn format_points_table(transformed: &TransformedSet, fit: &LinearFitResult) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>10} {:>10} {:>10} {:>12} {:>10} {:>10}\n",
            "diameter", "diam_m", "diam_m^2", "length", "fitted", "residual"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<10} {:-<10} {:-<10} {:-<12} {:-<10} {:-<10}\n",
            "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for p in &transformed.points {
        let fitted = fit.predict(p.diam_m_squared);
        out.push_str(
            format!(
                "{:>10.2} {:>10.4} {:>10.6} {:>12.3} {:>10.3} {:>10.3}\n",
                p.diameter_mm,
                p.diam_m,
                p.diam_m_squared,
                p.length_m,
                fitted,
                p.length_m - fitted
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}
