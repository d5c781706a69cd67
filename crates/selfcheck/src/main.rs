use std::process::ExitCode;

use anyhow::{Error, Result};
use clap::Parser;
use numcheck_selfcheck::{run_checks, Arithmetic, CheckOptions, STANDARD_CHECKS};
use tracing::{error, Level};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "numcheck - Run the built-in u32 kernel self-check",
    long_about = None
)]
struct Args {
    /// Evaluate the kernels with wrapping instead of checked arithmetic
    #[arg(long)]
    wrapping: bool,

    /// Evaluate every check instead of stopping at the first failure
    #[arg(long)]
    keep_going: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> CheckOptions {
        CheckOptions {
            arithmetic: if self.wrapping {
                Arithmetic::Wrapping
            } else {
                Arithmetic::Checked
            },
            stop_at_first_failure: !self.keep_going,
        }
    }
}

fn main() -> Result<ExitCode, Error> {
    let args = Args::parse();
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(Error::msg)?;
    }

    let report = run_checks(&STANDARD_CHECKS, &args.options());
    for failure in report.failures() {
        eprintln!("{failure}");
    }

    if let Some(failure) = report.first_failure() {
        error!(code = failure.code(), "self-check aborted");
    }
    Ok(ExitCode::from(report.exit_status()))
}
