//! Conversion of binary, decimal, and hexadecimal literals to binary digits.
//!
//! Normalization produces the minimal unsigned binary string for a literal.
//! It knows nothing about the destination signal; zero-padding to the
//! signal's width happens when the explicit sequence is built.

use std::fmt;

use crate::error::RadixError;

/// The numeric base a test value literal is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 2; literals pass through unchanged.
    #[default]
    Binary,
    /// Base 10.
    Decimal,
    /// Base 16, with an optional `0x` prefix.
    Hexadecimal,
}

impl Radix {
    /// The numeric base.
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Binary => write!(f, "binary"),
            Radix::Decimal => write!(f, "decimal"),
            Radix::Hexadecimal => write!(f, "hexadecimal"),
        }
    }
}

/// Converts `literal`, written in `radix`, to an unsigned binary digit string.
///
/// Binary literals are validated and returned unchanged. Decimal and
/// hexadecimal literals become the shortest binary string for their value
/// (`"0"` for zero).
pub fn normalize(literal: &str, radix: Radix) -> Result<String, RadixError> {
    let literal = literal.trim();
    let digits = match radix {
        Radix::Hexadecimal => literal
            .strip_prefix("0x")
            .or_else(|| literal.strip_prefix("0X"))
            .unwrap_or(literal),
        Radix::Binary | Radix::Decimal => literal,
    };

    if digits.is_empty() {
        return Err(RadixError::Empty { radix });
    }
    if !digits.chars().all(|c| c.is_digit(radix.base())) {
        return Err(RadixError::InvalidDigit {
            literal: literal.to_string(),
            radix,
        });
    }

    match radix {
        Radix::Binary => Ok(digits.to_string()),
        Radix::Decimal => {
            let value: u128 = digits.parse().map_err(|_| RadixError::Overflow {
                literal: literal.to_string(),
                radix,
            })?;
            Ok(format!("{value:b}"))
        }
        Radix::Hexadecimal => Ok(hex_to_binary(digits)),
    }
}

/// Normalizes every literal in order, failing on the first invalid one.
pub fn normalize_all<I, S>(literals: I, radix: Radix) -> Result<Vec<String>, RadixError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    literals
        .into_iter()
        .map(|literal| normalize(literal.as_ref(), radix))
        .collect()
}

// Nibble-wise, so hex literals of any length convert exactly.
fn hex_to_binary(digits: &str) -> String {
    let bits: String = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|nibble| format!("{nibble:04b}"))
        .collect();
    match bits.trim_start_matches('0') {
        "" => "0".to_string(),
        significant => significant.to_string(),
    }
}
