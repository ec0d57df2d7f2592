//! Seam between the evaluator and a host background solver.
//!
//! A host keeps its own (usually large) background record. The evaluator only
//! needs five numbers from it, so hosts implement [`GeffSource`] instead of
//! handing over their full layout. Hosts that also own initialisation implement
//! [`GeffStore`] and call [`init_geff`] once before a sweep.

use tracing::debug;

use crate::config::validate_params;
use crate::domain::{ExponentConvention, GeffParams};
use crate::error::GeffError;
use crate::math::resolve_width;
use crate::models::evaluate;

/// Read-only view of the model parameters held by a host.
pub trait GeffSource {
    fn geff_a1(&self) -> f64;
    fn geff_a2(&self) -> f64;
    fn geff_z1(&self) -> f64;
    fn geff_z2(&self) -> f64;
    /// Shared peak width; `<= 0` means "not configured".
    fn geff_s(&self) -> f64;

    fn geff_convention(&self) -> ExponentConvention {
        ExponentConvention::Full
    }
}

/// Host record that accepts parameter values.
pub trait GeffStore: GeffSource {
    fn store_geff(&mut self, params: &GeffParams);
}

impl GeffParams {
    /// Snapshot a host's parameters. Both peaks take the host's shared width.
    pub fn from_source<S: GeffSource + ?Sized>(source: &S) -> Self {
        GeffParams::shared_width(
            source.geff_a1(),
            source.geff_a2(),
            source.geff_z1(),
            source.geff_z2(),
            source.geff_s(),
        )
        .with_convention(source.geff_convention())
    }
}

/// Evaluate `G_eff / G_N` straight from a host record.
pub fn evaluate_source<S: GeffSource + ?Sized>(source: &S, a: f64) -> Result<f64, GeffError> {
    evaluate(a, &GeffParams::from_source(source))
}

/// Populate a host with defaults, or with `overrides` when the user supplied them.
///
/// Overrides are validated first; on error the host is left untouched. A host
/// exposes a single width through [`GeffSource::geff_s`], so overrides whose
/// effective widths differ are rejected rather than truncated.
pub fn init_geff<H: GeffStore + ?Sized>(host: &mut H, overrides: Option<GeffParams>) -> Result<(), GeffError> {
    let params = match overrides {
        Some(p) => {
            validate_params(&p)?;
            if resolve_width(p.width1) != resolve_width(p.width2) {
                return Err(GeffError::UnsharedWidth {
                    width1: p.width1,
                    width2: p.width2,
                });
            }
            p
        }
        None => GeffParams::default(),
    };
    debug!(?params, "initialising host G_eff parameters");
    host.store_geff(&params);
    Ok(())
}

/// Minimal background record carrying only the `G_eff` fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HostBackground {
    pub geff_a1: f64,
    pub geff_a2: f64,
    pub geff_z1: f64,
    pub geff_z2: f64,
    pub geff_s: f64,
    pub geff_convention: ExponentConvention,
}

impl GeffSource for HostBackground {
    fn geff_a1(&self) -> f64 {
        self.geff_a1
    }
    fn geff_a2(&self) -> f64 {
        self.geff_a2
    }
    fn geff_z1(&self) -> f64 {
        self.geff_z1
    }
    fn geff_z2(&self) -> f64 {
        self.geff_z2
    }
    fn geff_s(&self) -> f64 {
        self.geff_s
    }
    fn geff_convention(&self) -> ExponentConvention {
        self.geff_convention
    }
}

impl GeffStore for HostBackground {
    /// `init_geff` guarantees both widths resolve to the same value.
    fn store_geff(&mut self, params: &GeffParams) {
        self.geff_a1 = params.a1;
        self.geff_a2 = params.a2;
        self.geff_z1 = params.z1;
        self.geff_z2 = params.z2;
        self.geff_s = params.width1;
        self.geff_convention = params.convention;
    }
}
