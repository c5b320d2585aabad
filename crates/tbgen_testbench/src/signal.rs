//! Signal descriptors: parsing `[high:low]name` tokens into names and widths.

use std::fmt;

use crate::error::SignalError;

/// Whether a testbench signal drives the unit or observes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Driven by the testbench; declared as a `reg`.
    Input,
    /// Observed by the testbench; declared as a `wire`.
    Output,
}

impl Role {
    /// The Verilog declaration keyword for this role.
    pub fn keyword(self) -> &'static str {
        match self {
            Role::Input => "reg",
            Role::Output => "wire",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Input => write!(f, "input"),
            Role::Output => write!(f, "output"),
        }
    }
}

/// A declared bit range such as `[3:0]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitRange {
    /// The left (conventionally most significant) index.
    pub high: u32,
    /// The right index.
    pub low: u32,
}

impl BitRange {
    /// Number of bits spanned by the range, inclusive of both ends.
    ///
    /// Descending (`[3:0]`) and ascending (`[0:3]`) ranges have the same width.
    pub fn width(self) -> u32 {
        self.high.abs_diff(self.low) + 1
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.high, self.low)
    }
}

/// A testbench signal: a bare name, its optional range, and its role.
///
/// The width is fixed at parse time; a signal without a range is one bit wide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signal {
    /// The bare signal name, with any range prefix stripped.
    pub name: String,
    /// The declared range, if the token carried one.
    pub range: Option<BitRange>,
    /// Whether the testbench drives or observes the signal.
    pub role: Role,
}

impl Signal {
    /// Parses a raw token, either `name` or `[high:low]name`.
    pub fn parse(token: &str, role: Role) -> Result<Self, SignalError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SignalError::Empty);
        }

        let Some(rest) = token.strip_prefix('[') else {
            return Ok(Self {
                name: token.to_string(),
                range: None,
                role,
            });
        };

        let (range, name) = rest
            .split_once(']')
            .ok_or_else(|| SignalError::UnterminatedRange {
                token: token.to_string(),
            })?;
        let (high, low) = range
            .split_once(':')
            .ok_or_else(|| SignalError::MissingColon {
                token: token.to_string(),
            })?;

        let range = BitRange {
            high: parse_bound(token, high)?,
            low: parse_bound(token, low)?,
        };
        if range.high.abs_diff(range.low) == u32::MAX {
            return Err(SignalError::RangeTooWide {
                token: token.to_string(),
            });
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(SignalError::MissingName {
                token: token.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            range: Some(range),
            role,
        })
    }

    /// The signal's width in bits.
    pub fn width(&self) -> u32 {
        self.range.map_or(1, BitRange::width)
    }

    /// The Verilog declaration for this signal, e.g. `reg [3:0] data;`.
    pub fn declaration(&self) -> String {
        match self.range {
            Some(range) => format!("{} {range} {};", self.role.keyword(), self.name),
            None => format!("{} {};", self.role.keyword(), self.name),
        }
    }
}

fn parse_bound(token: &str, bound: &str) -> Result<u32, SignalError> {
    let bound = bound.trim();
    if bound.is_empty() || !bound.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SignalError::InvalidBound {
            token: token.to_string(),
            bound: bound.to_string(),
        });
    }
    bound.parse().map_err(|_| SignalError::InvalidBound {
        token: token.to_string(),
        bound: bound.to_string(),
    })
}

/// Parses an ordered list of raw tokens, preserving their order.
///
/// Order matters: port binding is positional. The first malformed token
/// aborts the whole list.
pub fn parse_signals<I, S>(tokens: I, role: Role) -> Result<Vec<Signal>, SignalError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| Signal::parse(token.as_ref(), role))
        .collect()
}

/// Bare names of `signals`, in order.
pub fn names(signals: &[Signal]) -> Vec<&str> {
    signals.iter().map(|s| s.name.as_str()).collect()
}

/// Widths of `signals`, parallel to [`names`].
pub fn widths(signals: &[Signal]) -> Vec<u32> {
    signals.iter().map(Signal::width).collect()
}
