//! Error types for signal parsing, literal conversion, and generation.

use std::io;

use tbgen_diagnostics::{Category, Diagnostic, DiagnosticCode};

use crate::radix::Radix;
use crate::signal::Role;

/// A raw signal token could not be parsed into a name and width.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    /// The token was empty.
    #[error("empty signal token")]
    Empty,

    /// A `[` was opened but never closed.
    #[error("malformed signal '{token}': missing closing ']'")]
    UnterminatedRange {
        /// The offending token.
        token: String,
    },

    /// The bracketed range has no `:` separator.
    #[error("malformed signal '{token}': expected a '[high:low]' range")]
    MissingColon {
        /// The offending token.
        token: String,
    },

    /// A range bound is not an unsigned integer.
    #[error("malformed signal '{token}': range bound '{bound}' is not an unsigned integer")]
    InvalidBound {
        /// The offending token.
        token: String,
        /// The bound text that failed to parse.
        bound: String,
    },

    /// The range spans more bits than can be counted.
    #[error("malformed signal '{token}': range is too wide")]
    RangeTooWide {
        /// The offending token.
        token: String,
    },

    /// Nothing follows the closing `]`.
    #[error("malformed signal '{token}': missing name after range")]
    MissingName {
        /// The offending token.
        token: String,
    },
}

/// A test value literal is not valid in its declared radix.
#[derive(Debug, thiserror::Error)]
pub enum RadixError {
    /// The literal was empty.
    #[error("empty {radix} literal")]
    Empty {
        /// The radix the literal was declared in.
        radix: Radix,
    },

    /// The literal contains a character that is not a digit of its radix.
    #[error("'{literal}' is not a valid {radix} literal")]
    InvalidDigit {
        /// The offending literal.
        literal: String,
        /// The radix the literal was declared in.
        radix: Radix,
    },

    /// The literal does not fit the converter's integer range.
    #[error("{radix} literal '{literal}' does not fit in 128 bits")]
    Overflow {
        /// The offending literal.
        literal: String,
        /// The radix the literal was declared in.
        radix: Radix,
    },
}

/// Errors that abort testbench generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A signal token was malformed.
    #[error(transparent)]
    Signal(#[from] SignalError),

    /// A test value was not valid in its radix.
    #[error(transparent)]
    Radix(#[from] RadixError),

    /// No input signals were declared, so there is nothing to drive.
    #[error("no input signals declared")]
    NoInputs,

    /// An input is too wide for its exhaustive counter.
    #[error(
        "input '{name}' is {width} bits wide; exhaustive enumeration supports at most 64 bits per input"
    )]
    WidthTooLarge {
        /// The input signal name.
        name: String,
        /// The input's declared width.
        width: u32,
    },

    /// Testbench and unit signal lists of one role have different lengths.
    #[error("{role} count mismatch: {testbench} testbench signal(s) but {unit} unit port(s)")]
    PortCountMismatch {
        /// Which signal list disagrees.
        role: Role,
        /// Number of testbench signals of that role.
        testbench: usize,
        /// Number of unit ports of that role.
        unit: usize,
    },

    /// The supplied values do not divide evenly into tests.
    #[error("{supplied} test value(s) cannot be split into tests of {per_test} value(s)")]
    PartialTest {
        /// Total number of values supplied.
        supplied: usize,
        /// Values required per test (the input count).
        per_test: usize,
    },

    /// A single test tuple has the wrong number of values.
    #[error("test {test} supplies {supplied} value(s) for {expected} input(s)")]
    TupleArity {
        /// One-based test number.
        test: usize,
        /// Values in the tuple.
        supplied: usize,
        /// Declared inputs.
        expected: usize,
    },

    /// A value needs more bits than its input declares.
    #[error("value '{value}' for input '{name}' needs {needed} bits but the input is {width} bit(s) wide")]
    ValueTooWide {
        /// The input signal name.
        name: String,
        /// The binary value.
        value: String,
        /// Significant bits in the value.
        needed: usize,
        /// The input's declared width.
        width: u32,
    },

    /// The code writer was asked to unindent below column zero.
    #[error("internal error: indentation underflow")]
    IndentUnderflow,

    /// Writing the testbench text failed.
    #[error("failed to write testbench: {0}")]
    Io(#[from] io::Error),
}

impl GenerateError {
    /// The `E1xx` code this error is reported under.
    pub fn code(&self) -> DiagnosticCode {
        let number = match self {
            GenerateError::Signal(_) => 101,
            GenerateError::Radix(_) => 102,
            GenerateError::NoInputs => 103,
            GenerateError::WidthTooLarge { .. } => 104,
            GenerateError::PortCountMismatch { .. } => 105,
            GenerateError::PartialTest { .. } => 106,
            GenerateError::TupleArity { .. } => 107,
            GenerateError::ValueTooWide { .. } => 108,
            GenerateError::IndentUnderflow => 109,
            GenerateError::Io(_) => 110,
        };
        DiagnosticCode::new(Category::Error, number)
    }

    /// Describes this error as an error-severity [`Diagnostic`].
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.to_string());
        match self {
            GenerateError::Signal(_) => diag
                .with_context("signal list")
                .with_help("write each signal as `name` or `[high:low]name`"),
            GenerateError::Radix(_) | GenerateError::ValueTooWide { .. } => {
                diag.with_context("test values")
            }
            GenerateError::NoInputs => diag.with_help("declare at least one input signal"),
            GenerateError::WidthTooLarge { .. } => diag
                .with_context("exhaustive vectors")
                .with_help("supply explicit test values for wide inputs"),
            GenerateError::PortCountMismatch { role, .. } => diag
                .with_context(format!("{role} ports"))
                .with_help("declare one testbench signal per unit port, in port order"),
            GenerateError::PartialTest { .. } | GenerateError::TupleArity { .. } => diag
                .with_context("test values")
                .with_note("each test takes one value per input, in input order"),
            GenerateError::IndentUnderflow | GenerateError::Io(_) => diag,
        }
    }
}
