//! SVG chart of a sweep, rendered with Plotters.
//!
//! Only shapes are drawn (no axis labels), so rendering needs no font backend.
//! The grey horizontal line marks standard gravity (`G_eff = 1`).

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::domain::{DetectedPeak, GeffSample};
use crate::error::AppError;

/// Write the sampled curve (blue), the `G_eff = 1` baseline, and detected peaks (red) to `path`.
pub fn write_svg_plot(
    path: &Path,
    samples: &[GeffSample],
    peaks: &[DetectedPeak],
    size: (u32, u32),
) -> Result<(), AppError> {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Err(AppError::new(2, "Cannot plot an empty sweep."));
    };
    let x_bounds = (first.ln_a, last.ln_a);
    let y_bounds = y_bounds(samples);

    let to_app_err =
        |e: String| AppError::new(2, format!("Failed to render SVG plot '{}': {e}", path.display()));

    let root = SVGBackend::new(path, size).into_drawing_area();
    draw(&root, samples, peaks, x_bounds, y_bounds).map_err(|e| to_app_err(e.to_string()))?;
    root.present().map_err(|e| to_app_err(e.to_string()))?;

    info!(path = %path.display(), "wrote SVG plot");
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    samples: &[GeffSample],
    peaks: &[DetectedPeak],
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root).margin(20).build_cartesian_2d(x0..x1, y0..y1)?;

    let baseline = RGBColor(180, 180, 180);
    chart.draw_series(LineSeries::new([(x0, 1.0), (x1, 1.0)], &baseline))?;
    chart.draw_series(LineSeries::new(samples.iter().map(|s| (s.ln_a, s.geff)), &BLUE))?;
    chart.draw_series(
        peaks
            .iter()
            .map(|p| Circle::new((p.ln_a, p.geff), 4, RED.filled())),
    )?;

    Ok(())
}

/// Vertical bounds always include the `G_eff = 1` baseline, padded by 5%.
fn y_bounds(samples: &[GeffSample]) -> (f64, f64) {
    let (mut lo, mut hi) = (1.0f64, 1.0f64);
    for s in samples {
        lo = lo.min(s.geff);
        hi = hi.max(s.geff);
    }
    let pad = ((hi - lo) * 0.05).max(1e-3);
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{find_peaks, test_support::samples_from};

    #[test]
    fn y_bounds_include_baseline() {
        let (lo, hi) = y_bounds(&samples_from(&[1.1, 1.2]));
        assert!(lo < 1.0 && hi > 1.2);

        let (lo, hi) = y_bounds(&samples_from(&[1.0, 1.0]));
        assert!(lo < 1.0 && hi > 1.0);
    }

    #[test]
    fn writes_svg_document() {
        let samples = samples_from(&[1.0, 1.05, 1.2, 1.05, 1.0]);
        let peaks = find_peaks(&samples);
        let path = std::env::temp_dir().join(format!("geff-plot-{}.svg", std::process::id()));

        write_svg_plot(&path, &samples, &peaks, (320, 200)).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn empty_sweep_is_rejected() {
        let path = std::env::temp_dir().join("geff-plot-empty.svg");
        assert_eq!(write_svg_plot(&path, &[], &[], (100, 100)).unwrap_err().exit_code(), 2);
    }
}
