//! Evaluation of `G_eff(a) / G_N` for the twin-peak model.
//!
//! The model superposes two Gaussian bumps in `x = ln a` on a baseline of 1:
//!
//! `G_eff(a) = 1 + A1 * g(x; z1, s1) + A2 * g(x; z2, s2)`
//!
//! where `g` is the unit-height kernel from [`crate::math::gaussian_peak`].
//! Nothing is clamped: large or negative amplitudes are returned as-is.

use crate::domain::{GeffParams, PeakTerms};
use crate::error::GeffError;
use crate::math::gaussian_peak;

/// `G_eff / G_N` at scale factor `a`.
///
/// Fails with [`GeffError::Domain`] unless `a > 0`.
pub fn evaluate(a: f64, params: &GeffParams) -> Result<f64, GeffError> {
    Ok(peak_terms(a, params)?.total)
}

/// `G_eff / G_N` at `x = ln a`.
///
/// Defined for every finite `x`, so this form cannot fail.
pub fn evaluate_ln(x: f64, params: &GeffParams) -> f64 {
    peak_terms_ln(x, params).total
}

/// Per-peak breakdown of [`evaluate`].
pub fn peak_terms(a: f64, params: &GeffParams) -> Result<PeakTerms, GeffError> {
    // `!(a > 0.0)` also rejects NaN.
    if !(a > 0.0) {
        return Err(GeffError::Domain { a });
    }
    Ok(peak_terms_ln(a.ln(), params))
}

/// Per-peak breakdown at `x = ln a`.
///
/// Grids far below `ln a ~ -745` have no representable `a`, so sweeps sample here.
pub fn peak_terms_ln(x: f64, params: &GeffParams) -> PeakTerms {
    let term1 = params.a1 * gaussian_peak(x, params.z1, params.width1, params.convention);
    let term2 = params.a2 * gaussian_peak(x, params.z2, params.width2, params.convention);
    PeakTerms {
        term1,
        term2,
        total: 1.0 + term1 + term2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_WIDTH, ExponentConvention};

    fn single_peak(z1: f64) -> GeffParams {
        GeffParams::shared_width(0.1, 0.0, z1, 0.0, 0.5)
    }

    #[test]
    fn flat_when_amplitudes_are_zero() {
        let params = GeffParams::shared_width(0.0, 0.0, -3.0, 2.0, 0.01);
        for &a in &[1e-300, 1e-5, 0.3, 1.0, 42.0] {
            assert_eq!(evaluate(a, &params).unwrap(), 1.0);
        }
    }

    #[test]
    fn peak_height_at_center() {
        let z1: f64 = -2.0;
        let v = evaluate(z1.exp(), &single_peak(z1)).unwrap();
        assert!((v - 1.1).abs() < 1e-12, "expected ~1.1, got {v}");
    }

    #[test]
    fn symmetric_about_center_in_log_space() {
        let z1 = -4.0;
        let params = single_peak(z1);
        for &d in &[0.05, 0.3, 1.0, 2.5] {
            let left = evaluate((z1 - d).exp(), &params).unwrap();
            let right = evaluate((z1 + d).exp(), &params).unwrap();
            assert!((left - right).abs() < 1e-12, "d={d}: {left} vs {right}");
        }
    }

    #[test]
    fn zero_width_matches_default_width() {
        let mut zero = GeffParams::shared_width(0.2, -0.1, -1.0, 0.5, 0.0);
        let mut dflt = GeffParams::shared_width(0.2, -0.1, -1.0, 0.5, DEFAULT_WIDTH);
        for conv in [ExponentConvention::Full, ExponentConvention::Half] {
            zero = zero.with_convention(conv);
            dflt = dflt.with_convention(conv);
            for &a in &[0.01, 0.5, 1.0, 3.0] {
                assert_eq!(evaluate(a, &zero).unwrap(), evaluate(a, &dflt).unwrap());
            }
        }
    }

    #[test]
    fn rejects_non_positive_scale_factor() {
        let params = GeffParams::twin_peak();
        assert_eq!(evaluate(0.0, &params), Err(GeffError::Domain { a: 0.0 }));
        assert_eq!(evaluate(-1.0, &params), Err(GeffError::Domain { a: -1.0 }));
        assert!(evaluate(f64::NAN, &params).is_err());
    }

    #[test]
    fn tiny_scale_factor_is_finite() {
        let v = evaluate(1e-300, &GeffParams::twin_peak()).unwrap();
        assert!(v.is_finite());
        assert!((v - 1.0).abs() < 1e-12);
    }

    #[test]
    fn twin_peak_heights_under_both_conventions() {
        for conv in [ExponentConvention::Full, ExponentConvention::Half] {
            let params = GeffParams::twin_peak().with_convention(conv);
            let early = evaluate((-8.0f64).exp(), &params).unwrap();
            let late = evaluate((-0.5f64).exp(), &params).unwrap();
            assert!((early - 1.10).abs() < 1e-9, "{conv:?}: early={early}");
            assert!((late - 1.05).abs() < 1e-9, "{conv:?}: late={late}");
        }
    }

    #[test]
    fn half_convention_is_wider() {
        let full = GeffParams::twin_peak();
        let half = full.with_convention(ExponentConvention::Half);
        let a = (-8.0f64 + 0.5).exp();
        assert!(evaluate(a, &half).unwrap() > evaluate(a, &full).unwrap());
    }

    #[test]
    fn negative_amplitude_is_not_clamped() {
        let params = GeffParams::shared_width(-3.0, 0.0, 0.0, 0.0, 1.0);
        let v = evaluate(1.0, &params).unwrap();
        assert!((v - -2.0).abs() < 1e-12);
    }

    #[test]
    fn terms_sum_to_total() {
        let t = peak_terms(0.1, &GeffParams::twin_peak()).unwrap();
        assert_eq!(t.total, 1.0 + t.term1 + t.term2);
        assert!(t.term1 >= 0.0 && t.term2 >= 0.0);
    }

    #[test]
    fn log_form_agrees_with_scale_factor_form() {
        let params = GeffParams::twin_peak();
        for &x in &[-9.0, -8.0, -3.0, -0.5, 0.0] {
            let via_a = evaluate(f64::exp(x), &params).unwrap();
            assert!((via_a - evaluate_ln(x, &params)).abs() < 1e-12);
        }
    }

    #[test]
    fn log_terms_are_defined_where_a_underflows() {
        let params = GeffParams::twin_peak();
        let x = -800.0f64;
        assert_eq!(x.exp(), 0.0);
        let t = peak_terms_ln(x, &params);
        assert_eq!(t.total, 1.0);
        assert_eq!(t.term1, 0.0);
    }

    mod property_based_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Zero amplitudes give exactly 1 regardless of centres and widths.
            #[test]
            fn prop_zero_amplitude_is_baseline(
                ln_a in -690.0f64..7.0,
                z1 in -20.0f64..5.0,
                z2 in -20.0f64..5.0,
                s in -1.0f64..3.0,
            ) {
                let params = GeffParams::shared_width(0.0, 0.0, z1, z2, s);
                prop_assert_eq!(evaluate(ln_a.exp(), &params).unwrap(), 1.0);
            }

            /// Result is finite and bounded by the amplitudes for any positive `a`.
            #[test]
            fn prop_finite_and_bounded(
                ln_a in -690.0f64..7.0,
                a1 in -2.0f64..2.0,
                a2 in -2.0f64..2.0,
                s in 0.01f64..3.0,
            ) {
                let params = GeffParams::shared_width(a1, a2, -8.0, -0.5, s);
                let v = evaluate(ln_a.exp(), &params).unwrap();
                prop_assert!(v.is_finite());
                prop_assert!(v <= 1.0 + a1.max(0.0) + a2.max(0.0) + 1e-12);
                prop_assert!(v >= 1.0 + a1.min(0.0) + a2.min(0.0) - 1e-12);
            }

            /// Single peak is mirror-symmetric about its centre in `ln a`.
            #[test]
            fn prop_symmetric_about_center(z1 in -15.0f64..2.0, d in 0.0f64..4.0, s in 0.05f64..2.0) {
                let params = GeffParams::shared_width(0.3, 0.0, z1, 0.0, s);
                let left = evaluate_ln(z1 - d, &params);
                let right = evaluate_ln(z1 + d, &params);
                prop_assert!((left - right).abs() < 1e-12);
            }

            /// Non-positive widths behave exactly like the default width.
            #[test]
            fn prop_non_positive_width_uses_default(ln_a in -20.0f64..3.0, s in -5.0f64..=0.0) {
                let bad = GeffParams::shared_width(0.1, 0.05, -8.0, -0.5, s);
                let good = GeffParams::shared_width(0.1, 0.05, -8.0, -0.5, DEFAULT_WIDTH);
                prop_assert_eq!(evaluate(ln_a.exp(), &bad).unwrap(), evaluate(ln_a.exp(), &good).unwrap());
            }
        }
    }
}
