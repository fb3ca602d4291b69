//! # Verify Subcommand
//!
//! Confirms 11-character NMIs, where the last character is the check
//! digit.
//!
//! ```bash
//! nmi verify 20019857328 20019857321
//! # 20019857328 / ok
//! # 20019857321 / mismatch (expected 8)
//! ```

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use nmi_core::{CheckDigit, NmiError};

use crate::output::{self, OutputFormat};

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// NMIs with their check digit appended (11 characters each).
    #[arg(required = true)]
    pub inputs: Vec<String>,
}

/// Outcome of verifying one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyStatus {
    /// The trailing digit is correct.
    Ok,
    /// Well-formed, but the trailing digit is wrong.
    Mismatch,
    /// Not a well-formed 11-character NMI.
    Invalid,
}

/// Result of verifying one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// The input as given.
    pub input: String,
    /// Verification outcome.
    pub status: VerifyStatus,
    /// The correct check digit, when the NMI part was well-formed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<CheckDigit>,
    /// Why the input was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Verify a single input.
pub fn verify_one(input: &str) -> VerifyReport {
    match nmi_core::parse_with_check_digit(input) {
        Ok((nmi, digit)) => {
            tracing::debug!(nmi = %nmi, check_digit = %digit, "check digit verified");
            VerifyReport {
                input: input.to_string(),
                status: VerifyStatus::Ok,
                expected: Some(digit),
                error: None,
            }
        }
        Err(NmiError::ChecksumMismatch {
            nmi,
            expected,
            found,
        }) => {
            tracing::warn!(nmi = %nmi, expected, found, "check digit mismatch");
            VerifyReport {
                input: input.to_string(),
                status: VerifyStatus::Mismatch,
                expected: CheckDigit::new(expected).ok(),
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!(input, error = %e, "rejected NMI");
            VerifyReport {
                input: input.to_string(),
                status: VerifyStatus::Invalid,
                expected: None,
                error: Some(output::reason(&e)),
            }
        }
    }
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let reports: Vec<VerifyReport> = args.inputs.iter().map(|i| verify_one(i)).collect();
    let all_ok = reports.iter().all(|r| r.status == VerifyStatus::Ok);

    match format {
        OutputFormat::Json => output::write_json(out, &reports)?,
        OutputFormat::Text => {
            for report in &reports {
                write!(out, "{} / ", report.input)?;
                match (report.status, report.expected, &report.error) {
                    (VerifyStatus::Ok, _, _) => writeln!(out, "ok")?,
                    (VerifyStatus::Mismatch, Some(expected), _) => {
                        writeln!(out, "mismatch (expected {expected})")?
                    }
                    (VerifyStatus::Mismatch, None, _) => writeln!(out, "mismatch")?,
                    (VerifyStatus::Invalid, _, Some(reason)) => {
                        writeln!(out, "invalid ({reason})")?
                    }
                    (VerifyStatus::Invalid, _, None) => writeln!(out, "invalid")?,
                }
            }
        }
    }

    Ok(output::exit_code(all_ok))
}
