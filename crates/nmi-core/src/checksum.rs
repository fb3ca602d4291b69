//! # NMI Checksum Calculator
//!
//! AEMO modulus-10 (Luhn-style) check digit for 10-character National
//! Meter Identifiers.
//!
//! ## Algorithm
//!
//! 1. Upper-case the input and require exactly 10 characters from `[A-Z0-9]`.
//! 2. Walk the characters right to left, doubling every other one starting
//!    with the rightmost.
//! 3. Each character contributes its ASCII code (not its digit value), so
//!    letters take part with their code magnitude: `'A'` is 65, `'0'` is 48.
//! 4. Sum the decimal digits of every (possibly doubled) code.
//! 5. The check digit is the distance from that sum up to the next multiple
//!    of 10, with `0` when the sum already is one.
//!
//! Using the raw character code is what makes the result agree with the
//! check digits AEMO publishes for alphanumeric NMIs.
//!
//! Reference: AEMO *National Metering Identifier Procedure*, NMI checksum
//! algorithm and sample code.

use crate::error::{FormatViolation, NmiError};
use crate::identity::{CheckDigit, Nmi};

/// Number of characters in an NMI, excluding its check digit.
pub const NMI_LENGTH: usize = 10;

/// Compute the check digit of an NMI.
///
/// The input is matched case-insensitively. Anything other than exactly
/// [`NMI_LENGTH`] characters from `[A-Z0-9]` is rejected.
///
/// # Errors
///
/// Returns [`NmiError::InvalidFormat`] for malformed input.
///
/// # Examples
///
/// ```
/// use nmi_core::check_digit;
///
/// assert_eq!(check_digit("2001985732").unwrap().value(), 8);
/// assert_eq!(check_digit("qaaavzzzzz").unwrap().value(), 3);
/// assert!(check_digit("ABC").is_err());
/// ```
pub fn check_digit(input: &str) -> Result<CheckDigit, NmiError> {
    let nmi = normalize(input)?;
    Ok(luhn_check_digit(&nmi))
}

/// Check a candidate digit against the one computed for `input`.
///
/// Candidates above 9 can never match and yield `Ok(false)`.
///
/// # Errors
///
/// Returns [`NmiError::InvalidFormat`] when `input` is not a well-formed NMI.
pub fn verify_check_digit(input: &str, candidate: u8) -> Result<bool, NmiError> {
    let expected = check_digit(input)?;
    Ok(expected.value() == candidate)
}

/// Split an 11-character NMI (identifier plus trailing check digit) and
/// confirm the digit.
///
/// # Errors
///
/// - [`NmiError::InvalidFormat`] when the total length is not 11, the last
///   character is not an ASCII digit, or the first 10 characters are not a
///   well-formed NMI.
/// - [`NmiError::ChecksumMismatch`] when the trailing digit is wrong.
pub fn parse_with_check_digit(input: &str) -> Result<(Nmi, CheckDigit), NmiError> {
    let found = input.chars().count();
    if found != NMI_LENGTH + 1 {
        return Err(NmiError::invalid(
            input,
            FormatViolation::Length {
                expected: NMI_LENGTH + 1,
                found,
            },
        ));
    }

    let mut chars = input.chars();
    let tail = chars.next_back();
    let body = chars.as_str();
    let supplied = match tail.and_then(|c| c.to_digit(10)) {
        Some(d) => d as u8,
        None => {
            return Err(NmiError::invalid(
                input,
                FormatViolation::Character {
                    character: tail.unwrap_or_default(),
                    position: NMI_LENGTH,
                },
            ))
        }
    };

    let nmi = Nmi::new(body)?;
    let expected = nmi.check_digit();
    if expected.value() != supplied {
        return Err(NmiError::ChecksumMismatch {
            nmi: nmi.as_str().to_string(),
            expected: expected.value(),
            found: supplied,
        });
    }

    Ok((nmi, expected))
}

/// Upper-case `input` and enforce the `^[A-Z0-9]{10}$` shape.
///
/// Case folding is ASCII-only so that no non-ASCII character can be
/// expanded or mapped into the allowed alphabet.
pub(crate) fn normalize(input: &str) -> Result<String, NmiError> {
    let upper = input.to_ascii_uppercase();

    let found = upper.chars().count();
    if found != NMI_LENGTH {
        return Err(NmiError::invalid(
            input,
            FormatViolation::Length {
                expected: NMI_LENGTH,
                found,
            },
        ));
    }

    if let Some((position, character)) = upper
        .chars()
        .enumerate()
        .find(|(_, c)| !(c.is_ascii_uppercase() || c.is_ascii_digit()))
    {
        return Err(NmiError::invalid(
            input,
            FormatViolation::Character {
                character,
                position,
            },
        ));
    }

    Ok(upper)
}

/// Run the checksum over an already-normalized NMI.
///
/// `nmi` must be ASCII; every byte is one character.
pub(crate) fn luhn_check_digit(nmi: &str) -> CheckDigit {
    let total: u32 = nmi
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, byte)| {
            let code = u32::from(byte);
            // Rightmost character (i == 0) is doubled.
            let value = if i % 2 == 0 { code * 2 } else { code };
            digit_sum(value)
        })
        .sum();

    let digit = (10 - total % 10) % 10;
    CheckDigit::from_checksum(digit as u8)
}

/// Sum of the decimal digits of `value`.
fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference pairs from the AEMO NMI Procedure.
    const AEMO_VECTORS: [(&str, u8); 10] = [
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

    #[test]
    fn aemo_reference_vectors() {
        for (nmi, expected) in AEMO_VECTORS {
            let digit = check_digit(nmi).unwrap();
            assert_eq!(digit.value(), expected, "check digit for {nmi}");
        }
    }

    #[test]
    fn lowercase_matches_uppercase() {
        for (nmi, expected) in AEMO_VECTORS {
            let lower = nmi.to_lowercase();
            assert_eq!(check_digit(&lower).unwrap().value(), expected);
        }
        assert_eq!(
            check_digit("SmVeW00085").unwrap(),
            check_digit("SMVEW00085").unwrap()
        );
    }

    #[test]
    fn multiple_of_ten_yields_zero() {
        // Digit sum is 120.
        assert_eq!(check_digit("6102000000").unwrap().value(), 0);
        assert_eq!(check_digit("4103000000").unwrap().value(), 0);
    }

    #[test]
    fn all_zeros() {
        // Every '0' is code 48; doubled 96 -> 15, undoubled 48 -> 12.
        // 5 * 15 + 5 * 12 = 135.
        assert_eq!(check_digit("0000000000").unwrap().value(), 5);
    }

    #[test]
    fn rejects_short_input() {
        let err = check_digit("ABC").unwrap_err();
        assert_eq!(
            err,
            NmiError::InvalidFormat {
                input: "ABC".to_string(),
                violation: FormatViolation::Length {
                    expected: 10,
                    found: 3
                },
            }
        );
    }

    #[test]
    fn rejects_long_input() {
        let err = check_digit("20019857321").unwrap_err();
        assert!(matches!(
            err,
            NmiError::InvalidFormat {
                violation: FormatViolation::Length { found: 11, .. },
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(check_digit("").unwrap_err().is_invalid_format());
    }

    #[test]
    fn rejects_disallowed_character() {
        let err = check_digit("abcdefghi!").unwrap_err();
        assert_eq!(
            err,
            NmiError::InvalidFormat {
                input: "abcdefghi!".to_string(),
                violation: FormatViolation::Character {
                    character: '!',
                    position: 9
                },
            }
        );
    }

    #[test]
    fn rejects_whitespace() {
        assert!(check_digit(" 200198573").is_err());
        assert!(check_digit("2001985732 ").is_err());
        assert!(check_digit("2001985732\n").is_err());
        assert!(check_digit("20019 5732").is_err());
    }

    #[test]
    fn rejects_non_ascii() {
        // 'ß' upper-cases to "SS" under full Unicode rules; it must not
        // be folded into the allowed alphabet.
        assert!(check_digit("ßAAAAAAAA").is_err());
        let err = check_digit("ßAAAAAAAAA").unwrap_err();
        assert!(matches!(
            err,
            NmiError::InvalidFormat {
                violation: FormatViolation::Character {
                    character: 'ß',
                    position: 0
                },
                ..
            }
        ));
        assert!(check_digit("２００１９８５７３２").is_err());
    }

    #[test]
    fn length_checked_before_characters() {
        let err = check_digit("!!").unwrap_err();
        assert!(matches!(
            err,
            NmiError::InvalidFormat {
                violation: FormatViolation::Length { found: 2, .. },
                ..
            }
        ));
    }

    #[test]
    fn error_keeps_caller_input() {
        let err = check_digit("abc").unwrap_err();
        assert!(matches!(err, NmiError::InvalidFormat { ref input, .. } if input == "abc"));
    }

    #[test]
    fn repeated_calls_agree() {
        let first = check_digit("QCDWW00010");
        let second = check_digit("QCDWW00010");
        assert_eq!(first, second);
    }

    #[test]
    fn letters_use_character_code() {
        // 'A' = 65: doubled 130 -> 4, undoubled 65 -> 11. 5 * 4 + 5 * 11 = 75.
        assert_eq!(check_digit("AAAAAAAAAA").unwrap().value(), 5);
        // 'Z' = 90: doubled 180 -> 9, undoubled 90 -> 9. 10 * 9 = 90.
        assert_eq!(check_digit("ZZZZZZZZZZ").unwrap().value(), 0);
    }

    #[test]
    fn digit_sum_values() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(96), 15);
        assert_eq!(digit_sum(180), 9);
    }

    #[test]
    fn verify_check_digit_matches() {
        assert_eq!(verify_check_digit("2001985732", 8), Ok(true));
        assert_eq!(verify_check_digit("2001985732", 7), Ok(false));
        assert_eq!(verify_check_digit("2001985732", 18), Ok(false));
        assert!(verify_check_digit("ABC", 0).is_err());
    }

    #[test]
    fn parse_with_check_digit_accepts_valid() {
        let (nmi, digit) = parse_with_check_digit("20019857328").unwrap();
        assert_eq!(nmi.as_str(), "2001985732");
        assert_eq!(digit.value(), 8);

        let (nmi, digit) = parse_with_check_digit("qaaavzzzzz3").unwrap();
        assert_eq!(nmi.as_str(), "QAAAVZZZZZ");
        assert_eq!(digit.value(), 3);
    }

    #[test]
    fn parse_with_check_digit_rejects_mismatch() {
        let err = parse_with_check_digit("20019857321").unwrap_err();
        assert_eq!(
            err,
            NmiError::ChecksumMismatch {
                nmi: "2001985732".to_string(),
                expected: 8,
                found: 1,
            }
        );
    }

    #[test]
    fn parse_with_check_digit_rejects_bad_length() {
        let err = parse_with_check_digit("2001985732").unwrap_err();
        assert!(matches!(
            err,
            NmiError::InvalidFormat {
                violation: FormatViolation::Length {
                    expected: 11,
                    found: 10
                },
                ..
            }
        ));
    }

    #[test]
    fn parse_with_check_digit_rejects_letter_suffix() {
        let err = parse_with_check_digit("2001985732X").unwrap_err();
        assert!(matches!(
            err,
            NmiError::InvalidFormat {
                violation: FormatViolation::Character {
                    character: 'X',
                    position: 10
                },
                ..
            }
        ));
    }

    #[test]
    fn parse_with_check_digit_rejects_multibyte_suffix() {
        let err = parse_with_check_digit("2001985732é").unwrap_err();
        assert!(matches!(
            err,
            NmiError::InvalidFormat {
                violation: FormatViolation::Character {
                    character: 'é',
                    position: 10
                },
                ..
            }
        ));
    }

    #[test]
    fn parse_with_check_digit_rejects_bad_body() {
        let err = parse_with_check_digit("2001-857328").unwrap_err();
        assert!(matches!(
            err,
            NmiError::InvalidFormat {
                violation: FormatViolation::Character {
                    character: '-',
                    position: 4
                },
                ..
            }
        ));
    }
}
