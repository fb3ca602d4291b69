//! # nmi-core — NMI Check Digit Calculation
//!
//! Computes and verifies the check digit of an Australian National Meter
//! Identifier (NMI) with the AEMO modulus-10 algorithm.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit results.** Malformed input is an `Err`, never a sentinel
//!    digit. A check digit of `0` and "invalid NMI" cannot be confused.
//!
//! 2. **Newtype wrappers.** [`Nmi`] and [`CheckDigit`] validate at
//!    construction and at deserialization. No bare strings or integers
//!    cross the API once validated.
//!
//! 3. **Character codes, not digit values.** Letters contribute their
//!    ASCII code to the checksum, which keeps results identical to the
//!    check digits AEMO publishes.
//!
//! ## Crate Policy
//!
//! - No I/O, no global state, no logging. Every function is pure.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//!
//! ## Example
//!
//! ```
//! use nmi_core::{check_digit, parse_with_check_digit, Nmi};
//!
//! assert_eq!(check_digit("QAAAVZZZZZ").unwrap().value(), 3);
//!
//! let nmi = Nmi::new("vaaa000066").unwrap();
//! assert_eq!(nmi.with_check_digit(), "VAAA0000665");
//!
//! assert!(parse_with_check_digit("VAAA0000665").is_ok());
//! assert!(parse_with_check_digit("VAAA0000661").is_err());
//! ```

pub mod checksum;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use checksum::{check_digit, parse_with_check_digit, verify_check_digit, NMI_LENGTH};
pub use error::{FormatViolation, NmiError};
pub use identity::{CheckDigit, Nmi};
