//! # Error Types
//!
//! Structured errors for NMI validation and checksum verification. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Malformed input is reported as [`NmiError::InvalidFormat`], a normal
//! `Err` return. Callers can never confuse a rejected identifier with a
//! valid check digit of `0`.

use thiserror::Error;

/// Errors produced by the NMI checksum library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NmiError {
    /// The identifier is not exactly 10 characters from `[A-Z0-9]`
    /// after upper-casing.
    #[error("invalid NMI format '{input}': {violation}")]
    InvalidFormat {
        /// The input as supplied by the caller.
        input: String,
        /// Which shape rule the input broke.
        violation: FormatViolation,
    },

    /// An 11-character NMI carried a check digit that does not match
    /// the one computed from its first 10 characters.
    #[error("checksum mismatch for NMI {nmi}: expected {expected}, found {found}")]
    ChecksumMismatch {
        /// The canonical 10-character NMI.
        nmi: String,
        /// The check digit computed from the NMI.
        expected: u8,
        /// The check digit that was supplied.
        found: u8,
    },

    /// A check digit value outside `0..=9`.
    #[error("check digit out of range: {0} (must be 0-9)")]
    CheckDigitOutOfRange(u8),
}

/// The shape rule an identifier failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatViolation {
    /// Wrong number of characters.
    #[error("expected {expected} characters, found {found}")]
    Length {
        /// Required character count.
        expected: usize,
        /// Actual character count.
        found: usize,
    },

    /// A character outside the allowed alphabet.
    #[error("disallowed character {character:?} at position {position}")]
    Character {
        /// The offending character (after upper-casing).
        character: char,
        /// 0-based character position.
        position: usize,
    },
}

impl NmiError {
    /// Shorthand for an [`NmiError::InvalidFormat`] error.
    pub(crate) fn invalid(input: &str, violation: FormatViolation) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            violation,
        }
    }

    /// True for [`NmiError::InvalidFormat`].
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}
