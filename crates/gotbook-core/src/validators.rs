//! ISBN validation
//!
//! Works on cleaned codes (see [`crate::clean_isbn`]). ISBN-10 codes get a
//! full mod-11 checksum; ISBN-13 codes only get a 978/979 prefix check, the
//! mod-10 check digit is not verified.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ConfigError, InvalidIsbn};

/// ISBN edition of a valid code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum IsbnEdition {
    /// 10 characters, mod-11 check digit
    Isbn10,
    /// 13 digits, Bookland EAN prefix 978 or 979
    Isbn13,
}

impl IsbnEdition {
    pub fn display_name(self) -> &'static str {
        match self {
            IsbnEdition::Isbn10 => "ISBN-10",
            IsbnEdition::Isbn13 => "ISBN-13",
        }
    }
}

impl fmt::Display for IsbnEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Character gate applied before the length branches.
///
/// 'X' is rewritten to 'A' before the gate runs, so the gate decides whether
/// ISBN-10 codes ending in 'X' can ever pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum DigitGate {
    /// Only '0'..'9'. Codes containing 'X' are rejected.
    #[default]
    Decimal,
    /// Signed base-11 integer parse: optional '+'/'-', then '0'..'9' or 'A',
    /// fitting in an i64. Lets 'X' check characters through.
    Radix11,
}

impl DigitGate {
    /// Whether `code` (already X→A substituted) passes this gate
    pub fn admits(self, code: &str) -> bool {
        match self {
            DigitGate::Decimal => !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()),
            DigitGate::Radix11 => i64::from_str_radix(code, 11).is_ok(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DigitGate::Decimal => "decimal",
            DigitGate::Radix11 => "radix11",
        }
    }
}

impl fmt::Display for DigitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigitGate {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decimal" => Ok(DigitGate::Decimal),
            "radix11" | "radix-11" => Ok(DigitGate::Radix11),
            other => Err(ConfigError::invalid(format!("unknown digit gate: {}", other))),
        }
    }
}

/// ISBN validator with a configurable digit gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validator {
    gate: DigitGate,
}

impl Validator {
    pub fn new(gate: DigitGate) -> Self {
        Self { gate }
    }

    pub fn gate(&self) -> DigitGate {
        self.gate
    }

    /// Validate a cleaned code, reporting the edition or why it failed
    pub fn validate(&self, code: &str) -> Result<IsbnEdition, InvalidIsbn> {
        let result = self.validate_inner(code);
        trace!(code, gate = %self.gate, ?result, "validated ISBN candidate");
        result
    }

    /// Boolean form of [`Validator::validate`]
    pub fn is_valid(&self, code: &str) -> bool {
        self.validate(code).is_ok()
    }

    fn validate_inner(&self, code: &str) -> Result<IsbnEdition, InvalidIsbn> {
        // ISBN-10 may end in 'X'; stand it in as the digit 'A' (ten)
        let substituted = code.replace('X', "A");

        if !self.gate.admits(&substituted) {
            return Err(InvalidIsbn::BadCharacters);
        }

        match substituted.chars().count() {
            10 => {
                if double_sum_checksum(&substituted) % 11 == 0 {
                    Ok(IsbnEdition::Isbn10)
                } else {
                    Err(InvalidIsbn::BadChecksum)
                }
            }
            13 => {
                if has_bookland_prefix(&substituted) {
                    Ok(IsbnEdition::Isbn13)
                } else {
                    Err(InvalidIsbn::BadPrefix)
                }
            }
            length => Err(InvalidIsbn::BadLength {
                length: u64::try_from(length).unwrap_or(u64::MAX),
            }),
        }
    }
}

/// Validate a cleaned code with the default (decimal) gate
pub fn validate_isbn(code: &str) -> Result<IsbnEdition, InvalidIsbn> {
    Validator::default().validate(code)
}

/// Whether a cleaned code is a valid ISBN under the default (decimal) gate
///
/// ```
/// use gotbook_core::is_valid_isbn;
/// assert!(is_valid_isbn("0306406152"));
/// assert!(is_valid_isbn("9790134685991"));
/// assert!(!is_valid_isbn("1234567890123"));
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_valid_isbn(code: &str) -> bool {
    Validator::default().is_valid(code)
}

/// Running double sum: `t` accumulates hex digit values, `s` accumulates `t`.
///
/// Equivalent to weighting the digits 10..1, so `s % 11 == 0` is the ISBN-10
/// check. Characters that are not hex digits count as 0.
fn double_sum_checksum(code: &str) -> u32 {
    let (_, s) = code.chars().fold((0u32, 0u32), |(t, s), ch| {
        let t = t + ch.to_digit(16).unwrap_or(0);
        (t, s + t)
    });
    s
}

fn has_bookland_prefix(code: &str) -> bool {
    code.starts_with("978") || code.starts_with("979")
}
