//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a sweep:
//! - the parameter record that produced it
//! - generation metadata (tool, UTC timestamp)
//! - the sampled `(ln a, G_eff)` grid for quick plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::domain::{CurveFile, CurveGrid, GeffParams, GeffSample};
use crate::error::AppError;

/// Build the curve file for a finished sweep.
pub fn curve_file(params: &GeffParams, samples: &[GeffSample]) -> CurveFile {
    CurveFile {
        tool: "geff".to_string(),
        generated_at: Utc::now(),
        params: *params,
        grid: CurveGrid {
            ln_a: samples.iter().map(|s| s.ln_a).collect(),
            geff: samples.iter().map(|s| s.geff).collect(),
        },
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, params: &GeffParams, samples: &[GeffSample]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    write_curve(BufWriter::new(file), &curve_file(params, samples))?;

    info!(path = %path.display(), points = samples.len(), "wrote curve JSON");
    Ok(())
}

/// Serialize a curve and flush `out`, so buffered write errors surface here.
pub fn write_curve<W: Write>(mut out: W, curve: &CurveFile) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut out, curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;
    out.flush()
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    if curve.grid.ln_a.len() != curve.grid.geff.len() {
        return Err(AppError::new(
            2,
            format!(
                "Invalid curve JSON: grid has {} ln_a values but {} G_eff values.",
                curve.grid.ln_a.len(),
                curve.grid.geff.len()
            ),
        ));
    }
    Ok(curve)
}
