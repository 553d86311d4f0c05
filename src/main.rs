//! Command-line entry point: reads a problem file, checks coverage, and
//! writes `OK`, a witness point, or `ERROR`.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sweepcover::io::{format_outcome, read_problem, write_outcome};
use sweepcover::math::RESOLUTION;
use sweepcover::operations::coverage::CoverageParams;

const DEFAULT_LOG_FILTER: &str = "warn,sweepcover=info";

/// Checks whether linear sensor sweeps cover a square region.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Problem file to read.
    #[arg(long, default_value = "INPUT")]
    input: PathBuf,

    /// File the verdict is written to.
    #[arg(long, default_value = "OUTPUT")]
    output: PathBuf,

    /// Print the verdict to stdout instead of writing the output file.
    #[arg(long)]
    stdout: bool,

    /// Cell size at which subdivision stops.
    #[arg(long, default_value_t = RESOLUTION, value_parser = parse_resolution)]
    resolution: f64,
}

fn parse_resolution(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("resolution must be positive, got {value}"))
    }
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for sweepcover.
    // RUST_LOG replaces the default entirely (e.g. RUST_LOG=sweepcover=trace).
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let args = Args::parse();
    let params = CoverageParams::default().with_resolution(args.resolution);

    let outcome = read_problem(&args.input, &params)
        .and_then(|problem| problem.verify(params))
        .map(|report| {
            info!(stats = ?report.stats, "coverage check finished");
            report.verdict
        });
    if let Err(e) = &outcome {
        warn!(error = %e, input = %args.input.display(), "coverage check failed");
    }

    if args.stdout {
        print!("{}", format_outcome(&outcome));
        return ExitCode::SUCCESS;
    }
    match write_outcome(&args.output, &outcome) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(error = %e, output = %args.output.display(), "cannot write verdict");
            ExitCode::FAILURE
        }
    }
}
