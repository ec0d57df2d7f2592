//! Shared "sweep pipeline" logic used by the `sweep` command and by library callers.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! grid -> per-sample evaluation (parallel) -> peak detection -> summary
//!
//! Front-ends can then focus on presentation (tables, plots, exports).

use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::{Density, DetectedPeak, GeffSample, SweepConfig};
use crate::error::AppError;
use crate::math::lin_space;
use crate::models::{hubble, peak_terms_ln};
use crate::report::{SweepSummary, find_peaks, summarize};

/// All computed outputs of a single sweep.
#[derive(Debug, Clone)]
pub struct SweepOutput {
    pub samples: Vec<GeffSample>,
    pub peaks: Vec<DetectedPeak>,
    pub summary: SweepSummary,
}

/// Sample `G_eff` (and optionally `H`) on a uniform grid in `ln a`.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepOutput, AppError> {
    let grid = lin_space(config.ln_a_min, config.ln_a_max, config.steps)?;
    debug!(steps = grid.len(), min = config.ln_a_min, max = config.ln_a_max, "sweep grid");

    // Samples are independent; `collect` keeps grid order.
    let samples: Vec<GeffSample> = grid
        .par_iter()
        .map(|&ln_a| sample_at(ln_a, config))
        .collect::<Result<_, AppError>>()?;

    let peaks = find_peaks(&samples);
    let summary = summarize(&samples)
        .ok_or_else(|| AppError::new(4, "Sweep produced no samples."))?;
    info!(samples = samples.len(), peaks = peaks.len(), "sweep complete");

    Ok(SweepOutput {
        samples,
        peaks,
        summary,
    })
}

// `a` may underflow to 0 on deep grids; `G_eff` is taken in log space so that
// only the Hubble rate needs a representable scale factor.
fn sample_at(ln_a: f64, config: &SweepConfig) -> Result<GeffSample, AppError> {
    let a = ln_a.exp();
    let terms = peak_terms_ln(ln_a, &config.params);
    if !terms.total.is_finite() {
        return Err(AppError::new(4, format!("Non-finite G_eff at ln(a) = {ln_a}.")));
    }
    let hubble_rate = match &config.density {
        Some(density) => Some(hubble_at(ln_a, a, density, config)?),
        None => None,
    };
    Ok(GeffSample {
        ln_a,
        a,
        redshift: a.recip() - 1.0,
        geff: terms.total,
        term1: terms.term1,
        term2: terms.term2,
        hubble: hubble_rate,
    })
}

fn hubble_at(ln_a: f64, a: f64, density: &Density, config: &SweepConfig) -> Result<f64, AppError> {
    let rho = density.rho_total(a);
    if !rho.is_finite() {
        return Err(AppError::new(
            4,
            format!("Density overflows at ln(a) = {ln_a}; raise --ln-a-min or drop --hubble."),
        ));
    }
    let h = hubble(a, rho, &config.params)?;
    if !h.is_finite() {
        return Err(AppError::new(4, format!("Non-finite Hubble rate at ln(a) = {ln_a}.")));
    }
    Ok(h)
}
