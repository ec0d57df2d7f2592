//! Gaussian peak kernel in log-scale-factor space.
//!
//! A single unit-height bump centred on `z` with width `s`:
//!
//! - `Full`: `g(x) = exp(-(x - z)^2 / s^2)`
//! - `Half`: `g(x) = exp(-(x - z)^2 / (2 s^2))`
//!
//! Numerical notes:
//! - The kernel is evaluated as `exp(-k * u^2)` with `u = (x - z) / s`; for large
//!   `|u|` this underflows cleanly to `0.0`, never to NaN.
//! - Widths that are not strictly positive (or not finite) are treated as
//!   "not configured" and replaced by `DEFAULT_WIDTH`.

use crate::domain::{DEFAULT_WIDTH, ExponentConvention};

/// Width actually used for evaluation.
pub fn resolve_width(width: f64) -> f64 {
    if width > 0.0 && width.is_finite() {
        width
    } else {
        DEFAULT_WIDTH
    }
}

/// Unit-height Gaussian bump at `x` (in `ln a`).
pub fn gaussian_peak(x: f64, center: f64, width: f64, convention: ExponentConvention) -> f64 {
    let u = (x - center) / resolve_width(width);
    (-convention.factor() * u * u).exp()
}
