//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the model code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::app::pipeline::SweepOutput;
use crate::domain::{GeffParams, GeffSample, PeakTerms, SweepConfig};

/// Format the parameter block shared by every command.
pub fn format_params(params: &GeffParams) -> String {
    let mut out = String::new();
    out.push_str(&format!("Convention: {:?} (exp(-{} * u^2))\n", params.convention, params.convention.factor()));
    out.push_str(&format!(
        "Peak 1: A1={:+.6} z1={:+.4} width1={:.4}\n",
        params.a1, params.z1, params.width1
    ));
    out.push_str(&format!(
        "Peak 2: A2={:+.6} z2={:+.4} width2={:.4}\n",
        params.a2, params.z2, params.width2
    ));
    out
}

/// Format a single-point evaluation.
pub fn format_evaluation(a: f64, terms: &PeakTerms) -> String {
    let mut out = String::new();
    out.push_str(&format!("a={a:.6e} ln(a)={:+.6} z={:.6e}\n", a.ln(), a.recip() - 1.0));
    out.push_str(&format!("term1={:.12e}\n", terms.term1));
    out.push_str(&format!("term2={:.12e}\n", terms.term2));
    out.push_str(&format!("G_eff/G_N={:.12}\n", terms.total));
    out
}

/// Format the sweep header, detected peaks, and extremes.
pub fn format_sweep_summary(config: &SweepConfig, output: &SweepOutput) -> String {
    let mut out = String::new();

    out.push_str("=== geff - twin-peak G_eff(a) sweep ===\n");
    out.push_str(&format_params(&config.params));
    out.push_str(&format!(
        "Grid: n={} | ln(a)=[{:+.3}, {:+.3}] | a=[{:.3e}, {:.3e}]\n",
        output.samples.len(),
        config.ln_a_min,
        config.ln_a_max,
        config.ln_a_min.exp(),
        config.ln_a_max.exp(),
    ));

    out.push_str("\nDetected peaks:\n");
    if output.peaks.is_empty() {
        out.push_str("  (none)\n");
    }
    for peak in &output.peaks {
        out.push_str(&format!(
            "- ln(a)={:+.4} a={:.4e} G_eff={:.6}\n",
            peak.ln_a,
            peak.ln_a.exp(),
            peak.geff
        ));
    }

    let s = &output.summary;
    out.push_str(&format!(
        "\nRange: min G_eff={:.6} at ln(a)={:+.4} | max G_eff={:.6} at ln(a)={:+.4}\n",
        s.min_geff, s.min_ln_a, s.max_geff, s.max_ln_a
    ));

    out
}

/// Format up to `max_rows` evenly strided samples (always including the last).
pub fn format_sample_table(samples: &[GeffSample], max_rows: usize) -> String {
    let mut out = String::new();
    let with_hubble = samples.iter().any(|s| s.hubble.is_some());

    let mut header = format!("{:>10} {:>12} {:>12} {:>14}", "ln_a", "a", "z", "G_eff");
    let mut rule = format!("{:-<10} {:-<12} {:-<12} {:-<14}", "", "", "", "");
    if with_hubble {
        header.push_str(&format!(" {:>12}", "H [1/s]"));
        rule.push_str(&format!(" {:-<12}", ""));
    }
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for s in stride(samples, max_rows) {
        let mut row = format!("{:>+10.4} {:>12.4e} {:>12.4e} {:>14.10}", s.ln_a, s.a, s.redshift, s.geff);
        if with_hubble {
            let h = s.hubble.map(|h| format!("{h:.4e}")).unwrap_or_default();
            row.push_str(&format!(" {h:>12}"));
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out
}

fn stride(samples: &[GeffSample], max_rows: usize) -> Vec<&GeffSample> {
    if samples.is_empty() || max_rows == 0 {
        return Vec::new();
    }
    if samples.len() <= max_rows {
        return samples.iter().collect();
    }
    let step = samples.len().div_ceil(max_rows);
    let mut rows: Vec<&GeffSample> = samples.iter().step_by(step).collect();
    let last = &samples[samples.len() - 1];
    if rows.last().is_some_and(|r| !std::ptr::eq(*r, last)) {
        rows.push(last);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::samples_from;

    #[test]
    fn params_block_lists_both_peaks() {
        let txt = format_params(&GeffParams::twin_peak());
        assert!(txt.contains("Peak 1: A1=+0.100000 z1=-8.0000 width1=0.5000"), "{txt}");
        assert!(txt.contains("Peak 2: A2=+0.050000 z2=-0.5000 width2=0.5000"), "{txt}");
        assert!(txt.starts_with("Convention: Full"));
    }

    #[test]
    fn table_strides_but_keeps_last_row() {
        let samples = samples_from(&[1.0; 10]);
        let txt = format_sample_table(&samples, 4);
        let rows: Vec<&str> = txt.lines().skip(2).collect();
        // step = ceil(10 / 4) = 3 -> indices 0, 3, 6, 9
        assert_eq!(rows.len(), 4);
        assert!(rows[3].trim_start().starts_with("+9.0000"), "{}", rows[3]);
        assert!(!txt.contains("H [1/s]"));
    }

    #[test]
    fn table_shows_hubble_column_when_present() {
        let mut samples = samples_from(&[1.0, 1.0]);
        samples[0].hubble = Some(2.0e-18);
        let txt = format_sample_table(&samples, 10);
        assert!(txt.contains("H [1/s]"));
        assert!(txt.contains("2.0000e-18"));
    }

    #[test]
    fn evaluation_prints_ratio() {
        let terms = PeakTerms {
            term1: 0.1,
            term2: 0.0,
            total: 1.1,
        };
        let txt = format_evaluation(1.0, &terms);
        assert!(txt.contains("G_eff/G_N=1.100000000000"), "{txt}");
    }
}
