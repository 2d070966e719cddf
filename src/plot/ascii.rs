//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks of unwind data
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - measurements: `o`
//! - fitted line (transformed plot only): `-`

use crate::domain::{LinearFitResult, MeasurementSet, TransformedSet};

/// Scatter of length (m) against raw diameter (mm).
pub fn render_raw_plot(measurements: &MeasurementSet, width: usize, height: usize) -> String {
    let points: Vec<(f64, f64)> = measurements
        .iter()
        .map(|m| (m.diameter_mm(), m.length_m()))
        .collect();
    render_scatter(
        "Length vs. Diameter",
        ("diameter", "mm"),
        &points,
        None,
        width,
        height,
    )
}

/// Scatter of length (m) against diameter squared (m^2), with the fitted line if given.
pub fn render_transformed_plot(
    transformed: &TransformedSet,
    fit: Option<&LinearFitResult>,
    width: usize,
    height: usize,
) -> String {
    let points: Vec<(f64, f64)> = transformed
        .points
        .iter()
        .map(|p| (p.diam_m_squared, p.length_m))
        .collect();

    let line = fit.and_then(|f| {
        let (x_min, x_max) = x_range(&points)?;
        let n = width.max(2);
        Some(
            (0..n)
                .map(|i| {
                    let u = i as f64 / (n as f64 - 1.0);
                    let x = x_min + u * (x_max - x_min);
                    (x, f.predict(x))
                })
                .collect::<Vec<_>>(),
        )
    });

    render_scatter(
        "Length vs. Diameter Squared",
        ("diameter^2", "m^2"),
        &points,
        line.as_deref(),
        width,
        height,
    )
}

fn render_scatter(
    title: &str,
    x_axis: (&str, &str),
    points: &[(f64, f64)],
    line: Option<&[(f64, f64)]>,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(points).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(points, line).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Line first so points overlay it.
    if let Some(line) = line {
        draw_curve(&mut grid, line, x_min, x_max, y_min, y_max);
    }

    for &(x, y) in points {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let (x_name, x_unit) = x_axis;
    let mut out = String::new();
    out.push_str(&format!(
        "{title}: {x_name}=[{x_min:.4}, {x_max:.4}] {x_unit} | length=[{y_min:.2}, {y_max:.2}] m\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &(x, _) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(points: &[(f64, f64)], line: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for &(_, y) in points.iter().chain(line.unwrap_or(&[]).iter()) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caliper::{fit, transform};

    fn two_point_set() -> MeasurementSet {
        MeasurementSet::from_pairs(&[(40.0, 0.0), (120.0, 20.0)]).unwrap()
    }

    #[test]
    fn raw_plot_golden_snapshot_small() {
        let txt = render_raw_plot(&two_point_set(), 10, 5);
        let expected = concat!(
            "Length vs. Diameter: diameter=[40.0000, 120.0000] mm | length=[-1.00, 21.00] m\n",
            "         o\n",
            "          \n",
            "          \n",
            "          \n",
            "o         \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn transformed_plot_overlays_fitted_line() {
        let t = transform(&two_point_set());
        let f = fit(&t).unwrap();
        let txt = render_transformed_plot(&t, Some(&f), 20, 8);

        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("Length vs. Diameter Squared: diameter^2=[0.0016, 0.0144] m^2"));
        assert!(lines[1].ends_with('o'));
        assert!(lines[8].starts_with('o'));
        assert!(lines[1..].iter().all(|l| l.chars().count() == 20));
        assert!(lines[2..8].iter().any(|l| l.contains('-')));
    }

    #[test]
    fn transformed_plot_without_fit_has_no_line() {
        let t = transform(&two_point_set());
        let txt = render_transformed_plot(&t, None, 12, 6);
        assert!(!txt.lines().skip(1).any(|l| l.contains('-')));
    }
}
