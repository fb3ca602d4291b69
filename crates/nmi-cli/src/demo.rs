//! # Demo Subcommand
//!
//! Runs the example NMIs from the AEMO NMI Procedure through the
//! calculator and prints `<NMI> / <check digit>` for each, flagging any
//! result that disagrees with the published digit.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use nmi_core::CheckDigit;

use crate::output::{self, OutputFormat};

/// Example NMIs and their published check digits.
pub const REFERENCE_NMIS: [(&str, u8); 10] = [
    ("2001985732", 8),
    ("QAAAVZZZZZ", 3),
    ("2001985733", 6),
    ("QCDWW00010", 2),
    ("3075621875", 8),
    ("SMVEW00085", 8),
    ("3075621876", 6),
    ("VAAA000065", 7),
    ("4316854005", 9),
    ("VAAA000066", 5),
];

/// Result for one reference NMI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// The reference NMI.
    pub nmi: &'static str,
    /// The published check digit.
    pub expected: u8,
    /// The computed check digit.
    pub computed: Option<CheckDigit>,
    /// Whether the two agree.
    pub agrees: bool,
}

/// Compute reports for every reference NMI.
pub fn demo_reports() -> Vec<DemoReport> {
    REFERENCE_NMIS
        .iter()
        .map(|&(nmi, expected)| {
            let computed = nmi_core::check_digit(nmi).ok();
            let agrees = computed.map(CheckDigit::value) == Some(expected);
            if !agrees {
                tracing::warn!(nmi, expected, ?computed, "reference check digit disagrees");
            }
            DemoReport {
                nmi,
                expected,
                computed,
                agrees,
            }
        })
        .collect()
}

/// Execute the demo subcommand.
pub fn run_demo(format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let reports = demo_reports();
    tracing::info!(count = reports.len(), "ran reference NMIs");
    let all_ok = reports.iter().all(|r| r.agrees);

    match format {
        OutputFormat::Json => output::write_json(out, &reports)?,
        OutputFormat::Text => {
            for report in &reports {
                match report.computed {
                    Some(digit) if report.agrees => writeln!(out, "{} / {digit}", report.nmi)?,
                    Some(digit) => writeln!(
                        out,
                        "{} / {digit} (expected {})",
                        report.nmi, report.expected
                    )?,
                    None => writeln!(out, "{} / invalid", report.nmi)?,
                }
            }
        }
    }

    Ok(output::exit_code(all_ok))
}
