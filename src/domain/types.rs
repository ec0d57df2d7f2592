//! Shared domain types.
//!
//! These types are intentionally kept small, `Copy` where possible, and
//! serializable so they can be:
//!
//! - passed by reference into the evaluator on every sample
//! - loaded from a JSON parameter file
//! - exported alongside sampled curves

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Peak width (in `ln a` units) substituted for any width `<= 0`.
pub const DEFAULT_WIDTH: f64 = 1.0;

/// Newton's gravitational constant in SI units (m³ kg⁻¹ s⁻²).
pub const G_NEWTON_SI: f64 = 6.67430e-11;

/// Exponent convention used inside each Gaussian peak.
///
/// Both forms peak at `1` on the centre; they differ in how fast the bump decays:
///
/// - `Full`: `exp(-((x - z) / s)^2)`
/// - `Half`: `exp(-0.5 * ((x - z) / s)^2)` (the statistician's Gaussian, `s` is a standard deviation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExponentConvention {
    #[default]
    Full,
    Half,
}

impl ExponentConvention {
    /// Multiplier `k` applied to `((x - z) / s)^2` before exponentiation.
    pub fn factor(self) -> f64 {
        match self {
            ExponentConvention::Full => 1.0,
            ExponentConvention::Half => 0.5,
        }
    }
}

/// Named parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Flat `G_eff = 1` with the default width.
    Default,
    /// Early peak at `ln a = -8`, late peak at `ln a = -0.5`.
    TwinPeak,
}

impl Preset {
    pub fn params(self) -> GeffParams {
        match self {
            Preset::Default => GeffParams::default(),
            Preset::TwinPeak => GeffParams::twin_peak(),
        }
    }
}

/// Twin-peak model parameters.
///
/// Built once and then read for every scale-factor sample; never mutated mid-sweep.
/// Widths `<= 0` mean "not configured" and are replaced by [`DEFAULT_WIDTH`]
/// at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeffParams {
    /// Amplitude of the first peak (fractional increase in G at its centre).
    pub a1: f64,
    /// Amplitude of the second peak.
    pub a2: f64,
    /// Centre of the first peak, in `ln a`.
    pub z1: f64,
    /// Centre of the second peak, in `ln a`.
    pub z2: f64,
    pub width1: f64,
    pub width2: f64,
    pub convention: ExponentConvention,
}

impl Default for GeffParams {
    fn default() -> Self {
        Self {
            a1: 0.0,
            a2: 0.0,
            z1: 0.0,
            z2: 0.0,
            width1: DEFAULT_WIDTH,
            width2: DEFAULT_WIDTH,
            convention: ExponentConvention::Full,
        }
    }
}

impl GeffParams {
    /// Both peaks share one width `s`.
    pub fn shared_width(a1: f64, a2: f64, z1: f64, z2: f64, s: f64) -> Self {
        Self {
            a1,
            a2,
            z1,
            z2,
            width1: s,
            width2: s,
            convention: ExponentConvention::Full,
        }
    }

    /// 10% bump deep in the radiation era plus a 5% bump at late times.
    pub fn twin_peak() -> Self {
        Self {
            a1: 0.10,
            a2: 0.05,
            z1: -8.0,
            z2: -0.5,
            width1: 0.5,
            width2: 0.5,
            convention: ExponentConvention::Full,
        }
    }

    pub fn with_convention(mut self, convention: ExponentConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Named numeric fields, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("a1", self.a1),
            ("a2", self.a2),
            ("z1", self.z1),
            ("z2", self.z2),
            ("width1", self.width1),
            ("width2", self.width2),
        ]
    }
}

/// Breakdown of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakTerms {
    pub term1: f64,
    pub term2: f64,
    /// `1 + term1 + term2`.
    pub total: f64,
}

/// Present-day densities (kg/m³) of the components feeding the Friedmann relation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density {
    pub rho_matter0: f64,
    pub rho_radiation0: f64,
    pub rho_vacuum: f64,
}

impl Density {
    /// Critical density for `H0 = 67.4 km/s/Mpc` split as
    /// `Ωm = 0.315`, `Ωr = 9.1e-5`, `ΩΛ = 1 - Ωm - Ωr`.
    pub fn planck_like() -> Self {
        const RHO_CRIT0: f64 = 8.53e-27;
        const OMEGA_M: f64 = 0.315;
        const OMEGA_R: f64 = 9.1e-5;
        Self {
            rho_matter0: OMEGA_M * RHO_CRIT0,
            rho_radiation0: OMEGA_R * RHO_CRIT0,
            rho_vacuum: (1.0 - OMEGA_M - OMEGA_R) * RHO_CRIT0,
        }
    }

    /// Total density at scale factor `a`: `ρm a⁻³ + ρr a⁻⁴ + ρΛ`.
    pub fn rho_total(&self, a: f64) -> f64 {
        self.rho_matter0 * a.powi(-3) + self.rho_radiation0 * a.powi(-4) + self.rho_vacuum
    }
}

/// Configuration for sampling `G_eff` over a grid in `ln a`.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub params: GeffParams,
    pub ln_a_min: f64,
    pub ln_a_max: f64,
    pub steps: usize,
    /// When present, each sample also carries `H(a)`.
    pub density: Option<Density>,
}

/// One sampled point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeffSample {
    pub ln_a: f64,
    pub a: f64,
    /// Cosmological redshift `1/a - 1`.
    pub redshift: f64,
    pub geff: f64,
    pub term1: f64,
    pub term2: f64,
    /// Hubble rate in s⁻¹.
    pub hubble: Option<f64>,
}

/// A local maximum of `G_eff` found on the sampled grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedPeak {
    pub index: usize,
    pub ln_a: f64,
    pub geff: f64,
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub params: GeffParams,
    pub grid: CurveGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub ln_a: Vec<f64>,
    pub geff: Vec<f64>,
}
