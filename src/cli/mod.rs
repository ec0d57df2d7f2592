//! Command-line parsing for the `geff` binary.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! model code. Parameter flags are shared by every evaluating command.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::ParamOverrides;
use crate::domain::{ExponentConvention, Preset};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "geff", version, about = "Twin-peak effective gravitational coupling G_eff(a)")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate G_eff/G_N at one scale factor.
    Eval(EvalArgs),
    /// Hubble rate H(a) with G replaced by G_eff(a).
    Hubble(HubbleArgs),
    /// Sample G_eff over a grid in ln(a), print a summary/plot, and optionally export.
    Sweep(SweepArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
}

/// Model parameter selection shared by every evaluating command.
#[derive(Debug, Args, Clone)]
pub struct ParamArgs {
    /// Starting parameter set.
    #[arg(long, value_enum, default_value_t = Preset::TwinPeak)]
    pub preset: Preset,

    /// JSON parameter file (falls back to `GEFF_PARAMS` from the environment / .env).
    #[arg(long, value_name = "JSON")]
    pub params: Option<PathBuf>,

    /// Amplitude of the first peak.
    #[arg(long, allow_negative_numbers = true)]
    pub a1: Option<f64>,

    /// Amplitude of the second peak.
    #[arg(long, allow_negative_numbers = true)]
    pub a2: Option<f64>,

    /// Centre of the first peak, in ln(a).
    #[arg(long, allow_negative_numbers = true)]
    pub z1: Option<f64>,

    /// Centre of the second peak, in ln(a).
    #[arg(long, allow_negative_numbers = true)]
    pub z2: Option<f64>,

    /// Width of both peaks in ln(a); values <= 0 fall back to the default width.
    #[arg(long = "peak-width", allow_negative_numbers = true)]
    pub peak_width: Option<f64>,

    /// Width of the first peak (overrides --peak-width).
    #[arg(long, allow_negative_numbers = true)]
    pub width1: Option<f64>,

    /// Width of the second peak (overrides --peak-width).
    #[arg(long, allow_negative_numbers = true)]
    pub width2: Option<f64>,

    /// Exponent convention inside each peak.
    #[arg(long, value_enum)]
    pub convention: Option<ExponentConvention>,
}

impl ParamArgs {
    pub fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            a1: self.a1,
            a2: self.a2,
            z1: self.z1,
            z2: self.z2,
            width: self.peak_width,
            width1: self.width1,
            width2: self.width2,
            convention: self.convention,
        }
    }
}

#[derive(Debug, Parser, Clone)]
pub struct EvalArgs {
    /// Scale factor (must be > 0).
    #[arg(short = 'a', long = "scale-factor", allow_negative_numbers = true)]
    pub a: f64,

    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Debug, Parser, Clone)]
pub struct HubbleArgs {
    /// Scale factor (must be > 0).
    #[arg(short = 'a', long = "scale-factor", allow_negative_numbers = true)]
    pub a: f64,

    /// Total density in kg/m^3.
    #[arg(long, allow_negative_numbers = true)]
    pub rho: f64,

    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Debug, Parser, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Lower end of the ln(a) grid.
    #[arg(long, default_value_t = -12.0, allow_negative_numbers = true)]
    pub ln_a_min: f64,

    /// Upper end of the ln(a) grid.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub ln_a_max: f64,

    /// Number of grid points (inclusive of both ends).
    #[arg(long, default_value_t = 241)]
    pub steps: usize,

    /// Also compute H(a) from a matter + radiation + vacuum density model.
    #[arg(long)]
    pub hubble: bool,

    /// Maximum number of rows in the printed sample table (0 hides it).
    #[arg(long, default_value_t = 13)]
    pub rows: usize,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export samples to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the sampled curve (params + grid) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,

    /// Write an SVG chart of the sweep.
    #[arg(long)]
    pub svg: Option<PathBuf>,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `geff sweep --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_accepts_negative_overrides() {
        let cli = Cli::try_parse_from([
            "geff", "eval", "-a", "0.5", "--z1", "-3.5", "--peak-width", "0", "--convention", "half",
        ])
        .unwrap();
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.a, 0.5);
        let o = args.params.overrides();
        assert_eq!(o.z1, Some(-3.5));
        assert_eq!(o.width, Some(0.0));
        assert_eq!(o.convention, Some(ExponentConvention::Half));
        assert_eq!(args.params.preset, Preset::TwinPeak);
    }

    #[test]
    fn sweep_defaults() {
        let cli = Cli::try_parse_from(["geff", "-vv", "sweep", "--preset", "default"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Sweep(args) = cli.command else {
            panic!("expected sweep");
        };
        assert_eq!(args.ln_a_min, -12.0);
        assert_eq!(args.steps, 241);
        assert!(args.plot && !args.no_plot);
        assert_eq!(args.params.preset, Preset::Default);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
