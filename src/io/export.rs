//! Export sweep samples to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets, notebooks, or a
//! host solver's tabulated-input reader.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::domain::GeffSample;
use crate::error::AppError;

pub const CSV_HEADER: &str = "ln_a,a,redshift,geff,term1,term2,hubble";

/// Write sweep samples to a CSV file.
pub fn write_sweep_csv(path: &Path, samples: &[GeffSample]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut file = BufWriter::new(file);
    write_sweep_rows(&mut file, samples)
        .and_then(|()| file.flush())
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV '{}': {e}", path.display())))?;

    info!(path = %path.display(), rows = samples.len(), "wrote sweep CSV");
    Ok(())
}

/// Write the header and one row per sample. `hubble` is empty when not computed.
pub fn write_sweep_rows<W: Write>(out: &mut W, samples: &[GeffSample]) -> std::io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for s in samples {
        writeln!(
            out,
            "{:.10},{:.10e},{:.10e},{:.15},{:.10e},{:.10e},{}",
            s.ln_a,
            s.a,
            s.redshift,
            s.geff,
            s.term1,
            s.term2,
            s.hubble.map(|h| format!("{h:.10e}")).unwrap_or_default(),
        )?;
    }
    Ok(())
}
