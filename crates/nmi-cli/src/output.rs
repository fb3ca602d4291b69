//! # Output Rendering
//!
//! Shared output helpers for the subcommands. Text mode prints one
//! `<input> / <result>` line per item; JSON mode prints a single
//! pretty-printed array.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use nmi_core::NmiError;

/// Output format for subcommand results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per input.
    #[default]
    Text,
    /// A JSON array of result objects.
    Json,
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Short human-readable reason for a rejected input.
///
/// Format errors report only the broken rule since the input is already
/// printed alongside.
pub fn reason(err: &NmiError) -> String {
    match err {
        NmiError::InvalidFormat { violation, .. } => violation.to_string(),
        other => other.to_string(),
    }
}

/// Process exit code for a batch: 0 when every item succeeded, 1 otherwise.
pub fn exit_code(all_ok: bool) -> u8 {
    if all_ok {
        0
    } else {
        1
    }
}
