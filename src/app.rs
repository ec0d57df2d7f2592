//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and installs logging
//! - resolves model parameters (preset, JSON file, flags)
//! - runs evaluations / sweeps
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Command, EvalArgs, HubbleArgs, ParamArgs, PlotArgs, SweepArgs};
use crate::domain::{Density, GeffParams, SweepConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `geff` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Eval(args) => handle_eval(args),
        Command::Hubble(args) => handle_hubble(args),
        Command::Sweep(args) => handle_sweep(args),
        Command::Plot(args) => handle_plot(args),
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v` flags.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn resolve(args: &ParamArgs) -> Result<GeffParams, AppError> {
    let file = args.params.clone().or_else(crate::config::params_path_from_env);
    crate::config::resolve_params(args.preset, file.as_deref(), &args.overrides())
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let params = resolve(&args.params)?;
    let terms = crate::models::peak_terms(args.a, &params)?;

    print!("{}", crate::report::format_params(&params));
    print!("{}", crate::report::format_evaluation(args.a, &terms));
    Ok(())
}

fn handle_hubble(args: HubbleArgs) -> Result<(), AppError> {
    let params = resolve(&args.params)?;
    let h = crate::models::hubble(args.a, args.rho, &params)?;
    debug!(a = args.a, rho = args.rho, h, "hubble rate");

    print!("{}", crate::report::format_params(&params));
    println!("a={:.6e} rho_total={:.6e} kg/m^3", args.a, args.rho);
    println!("H={h:.10e} 1/s");
    Ok(())
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let config = sweep_config_from_args(&args)?;
    let run = pipeline::run_sweep(&config)?;

    println!("{}", crate::report::format_sweep_summary(&config, &run));
    if args.rows > 0 {
        println!("{}", crate::report::format_sample_table(&run.samples, args.rows));
    }

    if args.plot && !args.no_plot {
        let plot = crate::plot::render_ascii_plot(&run.samples, &run.peaks, args.width, args.height);
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &args.export {
        crate::io::export::write_sweep_csv(path, &run.samples)?;
    }
    if let Some(path) = &args.export_curve {
        crate::io::curve::write_curve_json(path, &config.params, &run.samples)?;
    }
    if let Some(path) = &args.svg {
        crate::plot::write_svg_plot(path, &run.samples, &run.peaks, (960, 540))?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_ascii_plot_from_curve_file(&curve, args.width, args.height);

    println!("{plot}");
    Ok(())
}

pub fn sweep_config_from_args(args: &SweepArgs) -> Result<SweepConfig, AppError> {
    Ok(SweepConfig {
        params: resolve(&args.params)?,
        ln_a_min: args.ln_a_min,
        ln_a_max: args.ln_a_max,
        steps: args.steps,
        density: args.hubble.then(Density::planck_like),
    })
}
