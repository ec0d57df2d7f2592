//! Reporting utilities: peak detection and sweep summaries.

pub mod format;

pub use format::*;

use crate::domain::{DetectedPeak, GeffSample};

/// Extremes of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSummary {
    pub min_geff: f64,
    pub min_ln_a: f64,
    pub max_geff: f64,
    pub max_ln_a: f64,
}

/// Interior local maxima of `G_eff` on the sampled grid.
///
/// A flat top spanning several equal samples counts once, located at the
/// middle of the run. Grid endpoints are never reported.
pub fn find_peaks(samples: &[GeffSample]) -> Vec<DetectedPeak> {
    let mut out = Vec::new();
    let n = samples.len();
    let mut i = 1;
    while i + 1 < n {
        if samples[i].geff <= samples[i - 1].geff {
            i += 1;
            continue;
        }
        let mut j = i;
        while j + 1 < n && samples[j + 1].geff == samples[i].geff {
            j += 1;
        }
        if j + 1 < n && samples[j + 1].geff < samples[i].geff {
            let mid = (i + j) / 2;
            out.push(DetectedPeak {
                index: mid,
                ln_a: samples[mid].ln_a,
                geff: samples[mid].geff,
            });
        }
        i = j + 1;
    }
    out
}

/// Minimum and maximum of `G_eff` over the sweep (first occurrence wins on ties).
pub fn summarize(samples: &[GeffSample]) -> Option<SweepSummary> {
    let first = samples.first()?;
    let mut summary = SweepSummary {
        min_geff: first.geff,
        min_ln_a: first.ln_a,
        max_geff: first.geff,
        max_ln_a: first.ln_a,
    };
    for s in &samples[1..] {
        if s.geff < summary.min_geff {
            summary.min_geff = s.geff;
            summary.min_ln_a = s.ln_a;
        }
        if s.geff > summary.max_geff {
            summary.max_geff = s.geff;
            summary.max_ln_a = s.ln_a;
        }
    }
    Some(summary)
}


#[cfg(test)]
mod tests {
    use super::test_support::samples_from;
    use super::*;

    #[test]
    fn finds_strict_interior_maxima() {
        let s = samples_from(&[1.0, 1.2, 1.0, 1.0, 1.05, 1.01]);
        let peaks = find_peaks(&s);
        assert_eq!(peaks.len(), 2);
        assert_eq!(peaks[0].index, 1);
        assert_eq!(peaks[1].index, 4);
        assert_eq!(peaks[1].geff, 1.05);
    }

    #[test]
    fn flat_top_counts_once_at_its_middle() {
        let s = samples_from(&[1.0, 1.1, 1.1, 1.1, 1.0]);
        let peaks = find_peaks(&s);
        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].index, 2);
    }

    #[test]
    fn baseline_shoulder_is_not_a_peak() {
        // Recovering from a dip onto a flat baseline, then rising again.
        let s = samples_from(&[0.9, 1.0, 1.0, 1.0, 1.2, 1.3]);
        assert!(find_peaks(&s).is_empty());
    }

    #[test]
    fn monotone_and_flat_curves_have_no_peaks() {
        assert!(find_peaks(&samples_from(&[1.0, 1.1, 1.2, 1.3])).is_empty());
        assert!(find_peaks(&samples_from(&[1.0; 6])).is_empty());
        assert!(find_peaks(&[]).is_empty());
    }

    #[test]
    fn summary_tracks_extremes() {
        let s = samples_from(&[1.0, 1.2, 0.8, 1.1]);
        let sum = summarize(&s).unwrap();
        assert_eq!(sum.max_geff, 1.2);
        assert_eq!(sum.max_ln_a, 1.0);
        assert_eq!(sum.min_geff, 0.8);
        assert_eq!(sum.min_ln_a, 2.0);
        assert!(summarize(&[]).is_none());
    }
}
