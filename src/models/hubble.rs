//! Friedmann-equation Hubble rate with `G` replaced by `G_eff(a)`.
//!
//! `H^2 = (8π/3) * G_N * G_eff(a) * rho_total`
//!
//! This is glue showing where the coupling enters a background calculation;
//! it is not a solver.

use std::f64::consts::PI;

use crate::domain::{G_NEWTON_SI, GeffParams};
use crate::error::GeffError;
use crate::models::evaluate;

/// Unclamped `H^2` in s⁻² (`rho_total` in kg/m³).
///
/// Negative when the effective density or the effective coupling is negative.
pub fn hubble_squared(a: f64, rho_total: f64, params: &GeffParams) -> Result<f64, GeffError> {
    let g_eff_si = G_NEWTON_SI * evaluate(a, params)?;
    Ok((8.0 * PI / 3.0) * g_eff_si * rho_total)
}

/// Hubble rate `H(a)` in s⁻¹. Always `>= 0`.
pub fn hubble(a: f64, rho_total: f64, params: &GeffParams) -> Result<f64, GeffError> {
    let h_sq = hubble_squared(a, rho_total, params)?;
    // Also maps `-0.0` and NaN to a plain `0.0`.
    if !(h_sq > 0.0) {
        return Ok(0.0);
    }
    Ok(h_sq.sqrt())
}
