//! # Check Subcommand
//!
//! Computes the check digit for each NMI given on the command line.
//!
//! ```bash
//! nmi check 2001985732 QAAAVZZZZZ
//! # 2001985732 / 8
//! # QAAAVZZZZZ / 3
//! ```

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use nmi_core::CheckDigit;

use crate::output::{self, OutputFormat};

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// 10-character NMIs (case-insensitive).
    #[arg(required = true)]
    pub nmis: Vec<String>,
}

/// Result of computing one check digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The input as given.
    pub input: String,
    /// The computed check digit, if the input was well-formed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_digit: Option<CheckDigit>,
    /// Why the input was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    /// Whether a check digit was produced.
    pub fn is_ok(&self) -> bool {
        self.check_digit.is_some()
    }
}

/// Compute the report for a single input.
pub fn check_one(input: &str) -> CheckReport {
    match nmi_core::check_digit(input) {
        Ok(digit) => {
            tracing::debug!(input, check_digit = %digit, "computed check digit");
            CheckReport {
                input: input.to_string(),
                check_digit: Some(digit),
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!(input, error = %e, "rejected NMI");
            CheckReport {
                input: input.to_string(),
                check_digit: None,
                error: Some(output::reason(&e)),
            }
        }
    }
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let reports: Vec<CheckReport> = args.nmis.iter().map(|n| check_one(n)).collect();
    let all_ok = reports.iter().all(CheckReport::is_ok);

    match format {
        OutputFormat::Json => output::write_json(out, &reports)?,
        OutputFormat::Text => {
            for report in &reports {
                match (&report.check_digit, &report.error) {
                    (Some(digit), _) => writeln!(out, "{} / {digit}", report.input)?,
                    (None, Some(reason)) => {
                        writeln!(out, "{} / invalid ({reason})", report.input)?
                    }
                    (None, None) => writeln!(out, "{} / invalid", report.input)?,
                }
            }
        }
    }

    Ok(output::exit_code(all_ok))
}
