//! Parameter configuration: JSON files, environment, and per-field overrides.
//!
//! Resolution order (later wins):
//!
//! 1. a named preset
//! 2. a JSON parameter file (explicit path, else `GEFF_PARAMS` from the environment / `.env`)
//! 3. individual overrides (CLI flags)
//!
//! The resolved record is validated once here, so evaluation never has to.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::{ExponentConvention, GeffParams, Preset};
use crate::error::{AppError, GeffError};

/// Environment variable naming a JSON parameter file.
pub const PARAMS_ENV: &str = "GEFF_PARAMS";

/// Per-field overrides applied on top of a base record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamOverrides {
    pub a1: Option<f64>,
    pub a2: Option<f64>,
    pub z1: Option<f64>,
    pub z2: Option<f64>,
    /// Sets both widths; `width1`/`width2` take precedence when also given.
    pub width: Option<f64>,
    pub width1: Option<f64>,
    pub width2: Option<f64>,
    pub convention: Option<ExponentConvention>,
}

impl ParamOverrides {
    pub fn apply(&self, mut params: GeffParams) -> GeffParams {
        if let Some(v) = self.a1 {
            params.a1 = v;
        }
        if let Some(v) = self.a2 {
            params.a2 = v;
        }
        if let Some(v) = self.z1 {
            params.z1 = v;
        }
        if let Some(v) = self.z2 {
            params.z2 = v;
        }
        if let Some(v) = self.width {
            params.width1 = v;
            params.width2 = v;
        }
        if let Some(v) = self.width1 {
            params.width1 = v;
        }
        if let Some(v) = self.width2 {
            params.width2 = v;
        }
        if let Some(c) = self.convention {
            params.convention = c;
        }
        params
    }
}

/// Reject non-finite fields; warn about amplitudes that can turn `G_eff` negative.
pub fn validate_params(params: &GeffParams) -> Result<(), GeffError> {
    for (name, value) in params.fields() {
        if !value.is_finite() {
            return Err(GeffError::InvalidParameter { name, value });
        }
    }
    for (name, amp) in [("a1", params.a1), ("a2", params.a2)] {
        if amp < -1.0 {
            warn!(param = name, amp, "amplitude below -1 drives G_eff negative near its peak");
        }
    }
    Ok(())
}

/// Read a JSON parameter file. Missing fields take their default values.
pub fn load_params(path: &Path) -> Result<GeffParams, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open params JSON '{}': {e}", path.display())))?;
    let params: GeffParams = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Failed to parse params JSON '{}': {e}", path.display())))?;
    info!(path = %path.display(), "loaded G_eff parameters");
    Ok(params)
}

/// Parameter file named by `GEFF_PARAMS`, after loading `.env` if present.
pub fn params_path_from_env() -> Option<PathBuf> {
    dotenvy::dotenv().ok();
    std::env::var_os(PARAMS_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Resolve the final parameter record.
pub fn resolve_params(
    preset: Preset,
    file: Option<&Path>,
    overrides: &ParamOverrides,
) -> Result<GeffParams, AppError> {
    let mut params = preset.params();
    if let Some(path) = file {
        params = load_params(path)?;
    }
    let params = overrides.apply(params);
    validate_params(&params)?;
    debug!(?params, "resolved G_eff parameters");
    Ok(params)
}
