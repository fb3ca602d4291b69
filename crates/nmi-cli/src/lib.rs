//! # nmi-cli — NMI Check Digit Command-Line Interface
//!
//! Provides the `nmi` binary on top of `nmi-core`.
//!
//! ## Subcommands
//!
//! - `nmi check` — Compute check digits for 10-character NMIs.
//! - `nmi verify` — Confirm 11-character NMIs (NMI plus check digit).
//! - `nmi demo` — Run the AEMO reference NMIs.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here take parsed
//!   arguments and a writer, and return a process exit code.
//! - No checksum logic here. Everything delegates to `nmi-core`.

pub mod check;
pub mod demo;
pub mod output;
pub mod verify;

pub use output::OutputFormat;
