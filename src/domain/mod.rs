//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the model parameter record (`GeffParams`) and its exponent convention
//! - physical inputs for the Hubble rate (`Density`, `G_NEWTON_SI`)
//! - sweep configuration and outputs (`SweepConfig`, `GeffSample`, `CurveFile`)

pub mod types;

pub use types::*;
