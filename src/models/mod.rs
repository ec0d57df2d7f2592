//! Twin-peak `G_eff(a)` model and its Friedmann-equation consumer.
//!
//! Both are small, pure functions of `(a, params)` so sweep and host code can
//! call them from any thread without coordination.

pub mod geff;
pub mod hubble;

pub use geff::*;
pub use hubble::*;
