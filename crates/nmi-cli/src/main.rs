//! # nmi CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nmi_cli::check::{run_check, CheckArgs};
use nmi_cli::demo::run_demo;
use nmi_cli::verify::{run_verify, VerifyArgs};
use nmi_cli::OutputFormat;

/// NMI check digit tool.
///
/// Computes and verifies AEMO National Meter Identifier check digits.
#[derive(Parser, Debug)]
#[command(name = "nmi", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the check digit for one or more 10-character NMIs.
    Check(CheckArgs),

    /// Verify one or more 11-character NMIs (NMI followed by its check digit).
    Verify(VerifyArgs),

    /// Run the AEMO reference NMIs and print their check digits.
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout carries only results.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(format = ?cli.format, "nmi CLI starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Check(args) => run_check(args, cli.format, &mut out),
        Commands::Verify(args) => run_verify(args, cli.format, &mut out),
        Commands::Demo => run_demo(cli.format, &mut out),
    }
    .and_then(|code| {
        out.flush()?;
        Ok(code)
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
