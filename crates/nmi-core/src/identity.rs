//! # NMI Newtypes
//!
//! Domain-primitive newtypes for National Meter Identifiers and their
//! check digits. Both validate at construction time, so a held [`Nmi`] is
//! always 10 upper-case characters from `[A-Z0-9]` and a held
//! [`CheckDigit`] is always in `0..=9`.
//!
//! ## Validation
//!
//! - [`Nmi`]: case-insensitive input, stored upper-cased. Same rules as
//!   [`check_digit`](crate::check_digit).
//! - [`CheckDigit`]: integer `0..=9`.
//!
//! Deserialization routes through the same constructors, so invalid
//! values are rejected at the serde boundary as well.

use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::error::NmiError;

/// Implement `Deserialize` for a newtype by deserializing the raw inner
/// type and routing it through the type's `new()` constructor.
macro_rules! impl_validating_deserialize {
    ($ty:ident, $raw:ty) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <$raw>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Nmi
// ---------------------------------------------------------------------------

/// A validated National Meter Identifier.
///
/// Holds the canonical upper-case form without its check digit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Nmi(String);

impl_validating_deserialize!(Nmi, String);

impl Nmi {
    /// Create an NMI, validating format and upper-casing it.
    ///
    /// # Errors
    ///
    /// Returns [`NmiError::InvalidFormat`] if the value is not exactly 10
    /// characters from `[A-Za-z0-9]`.
    pub fn new(value: impl Into<String>) -> Result<Self, NmiError> {
        let raw = value.into();
        checksum::normalize(&raw).map(Self)
    }

    /// Access the canonical upper-case NMI.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compute this NMI's check digit.
    pub fn check_digit(&self) -> CheckDigit {
        checksum::luhn_check_digit(&self.0)
    }

    /// True when `candidate` is this NMI's check digit.
    pub fn verify(&self, candidate: CheckDigit) -> bool {
        self.check_digit() == candidate
    }

    /// The 11-character form: the NMI followed by its check digit.
    pub fn with_check_digit(&self) -> String {
        format!("{}{}", self.0, self.check_digit())
    }
}

impl std::fmt::Display for Nmi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Nmi {
    type Err = NmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Nmi {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// CheckDigit
// ---------------------------------------------------------------------------

/// A checksum digit in `0..=9`.
///
/// Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CheckDigit(u8);

impl_validating_deserialize!(CheckDigit, u8);

impl CheckDigit {
    /// Create a check digit.
    ///
    /// # Errors
    ///
    /// Returns [`NmiError::CheckDigitOutOfRange`] for values above 9.
    pub fn new(value: u8) -> Result<Self, NmiError> {
        if value > 9 {
            return Err(NmiError::CheckDigitOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Wrap the output of the checksum reduction, which is always `< 10`.
    pub(crate) fn from_checksum(value: u8) -> Self {
        debug_assert!(value <= 9);
        Self(value)
    }

    /// The digit as an integer.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit as an ASCII character `'0'..='9'`.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl std::fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for CheckDigit {
    type Error = NmiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CheckDigit> for u8 {
    fn from(digit: CheckDigit) -> Self {
        digit.0
    }
}
