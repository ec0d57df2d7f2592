//! `geff-twinpeak` library crate.
//!
//! Evaluates a twin-peak effective gravitational coupling `G_eff(a) / G_N`
//! and the Friedmann-equation Hubble rate built on it.
//!
//! The binary (`geff`) is a thin wrapper around this library so that:
//!
//! - a host background solver can call the evaluator directly (`host`, `models`)
//! - core logic is testable without spawning processes
//! - sweeps, reports, and exports are reusable from notebooks or other tools

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;

pub use domain::{DEFAULT_WIDTH, ExponentConvention, G_NEWTON_SI, GeffParams};
pub use error::GeffError;
pub use host::{GeffSource, GeffStore, HostBackground, evaluate_source, init_geff};
pub use models::{evaluate, evaluate_ln, hubble, peak_terms, peak_terms_ln};
