//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - sampled curve: `-` line
//! - detected peaks: `^`

use crate::domain::{CurveFile, DetectedPeak, GeffSample};

/// Render a plot for an in-memory sweep.
pub fn render_ascii_plot(samples: &[GeffSample], peaks: &[DetectedPeak], width: usize, height: usize) -> String {
    let points: Vec<(f64, f64)> = samples.iter().map(|s| (s.ln_a, s.geff)).collect();
    let marks: Vec<(f64, f64)> = peaks.iter().map(|p| (p.ln_a, p.geff)).collect();
    render_plot(&points, &marks, width, height)
}

/// Render a plot from a saved curve JSON file (curve only, no peak marks).
pub fn render_ascii_plot_from_curve_file(curve: &CurveFile, width: usize, height: usize) -> String {
    let points: Vec<(f64, f64)> = curve
        .grid
        .ln_a
        .iter()
        .zip(curve.grid.geff.iter())
        .map(|(&x, &y)| (x, y))
        .collect();
    render_plot(&points, &[], width, height)
}

fn render_plot(curve: &[(f64, f64)], marks: &[(f64, f64)], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = range(curve.iter().map(|p| p.0)).unwrap_or((-1.0, 0.0));
    // A flat curve (all samples equal) still gets a visible band around it.
    let (y_min, y_max) = range(curve.iter().map(|p| p.1)).unwrap_or_else(|| {
        let y = curve.first().map(|p| p.1).unwrap_or(1.0);
        (y - 0.5, y + 0.5)
    });
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    draw_curve(&mut grid, curve, x_min, x_max, y_min, y_max);

    for &(x, y) in marks {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = '^';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: ln(a)=[{x_min:.3}, {x_max:.3}] | G_eff=[{y_min:.4}, {y_max:.4}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
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
    use crate::domain::{CurveGrid, GeffParams};
    use crate::report::{find_peaks, test_support::samples_from};

    #[test]
    fn plot_golden_snapshot_small() {
        let samples = samples_from(&[1.0, 1.0, 1.1, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let peaks = find_peaks(&samples);

        let txt = render_ascii_plot(&samples, &peaks, 10, 5);
        let expected = concat!(
            "Plot: ln(a)=[0.000, 9.000] | G_eff=[0.9950, 1.1050]\n",
            "  ^       \n",
            "  -       \n",
            "  --      \n",
            " - -      \n",
            "-- -------\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn flat_curve_renders_middle_row() {
        let samples = samples_from(&[1.0; 4]);
        let txt = render_ascii_plot(&samples, &[], 10, 5);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], "----------");
    }

    #[test]
    fn curve_file_plot_uses_saved_grid() {
        let curve = CurveFile {
            tool: "geff".to_string(),
            generated_at: chrono::Utc::now(),
            params: GeffParams::default(),
            grid: CurveGrid {
                ln_a: vec![-2.0, -1.0, 0.0],
                geff: vec![1.0, 1.2, 1.0],
            },
        };
        let txt = render_ascii_plot_from_curve_file(&curve, 20, 6);
        assert!(txt.starts_with("Plot: ln(a)=[-2.000, 0.000]"));
        assert!(!txt.contains('^'));
        assert_eq!(txt.lines().count(), 7);
    }
}
