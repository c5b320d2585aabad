//! Exhaustive enumeration of every input combination.
//!
//! Runtime and output size are exponential in the total input width: a
//! testbench over `n` input bits has `2^n` vectors.

use tbgen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

use crate::counter::{increment, Counter};
use crate::error::GenerateError;
use crate::signal::Signal;
use crate::vector::{TestSequence, TestVector};

/// Widest input a [`Counter`] can hold.
pub const MAX_INPUT_WIDTH: u32 = 64;

/// Largest sequence generated without a [`LARGE_SEQUENCE`] warning.
pub const LARGE_SEQUENCE_THRESHOLD: u128 = 1 << 16;

/// Emitted when an exhaustive sequence exceeds [`LARGE_SEQUENCE_THRESHOLD`] vectors.
pub const LARGE_SEQUENCE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 103);

/// Iterator over every combination of input values, in odometer order.
///
/// The first input changes slowest and the last changes fastest, so the
/// sequence counts through the concatenation of all inputs. The all-zero
/// vector comes first and the all-maximum vector last.
#[derive(Debug)]
pub struct ExhaustiveVectors {
    counters: Vec<Counter>,
    exhausted: bool,
}

impl ExhaustiveVectors {
    /// Creates the enumeration for `inputs`.
    ///
    /// Fails if any input is wider than [`MAX_INPUT_WIDTH`].
    pub fn new(inputs: &[Signal]) -> Result<Self, GenerateError> {
        let counters = inputs
            .iter()
            .map(|signal| match signal.width() {
                width if width > MAX_INPUT_WIDTH => Err(GenerateError::WidthTooLarge {
                    name: signal.name.clone(),
                    width,
                }),
                width => Ok(Counter::new(width)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            counters,
            exhausted: false,
        })
    }

    /// Total input width in bits.
    pub fn width(&self) -> u32 {
        self.counters.iter().map(|c| c.width).sum()
    }

    /// Total number of vectors, `2^width`, if it fits in a `u128`.
    pub fn total(&self) -> Option<u128> {
        1u128.checked_shl(self.width())
    }

    /// Warns in `sink` when the enumeration is larger than [`LARGE_SEQUENCE_THRESHOLD`].
    pub fn report_size(&self, sink: &DiagnosticSink) {
        let bits = self.width();
        let count = match self.total() {
            Some(total) if total <= LARGE_SEQUENCE_THRESHOLD => return,
            Some(total) => total.to_string(),
            None => format!("2^{bits}"),
        };
        sink.emit(
            Diagnostic::warning(LARGE_SEQUENCE, format!("exhaustive sequence of {count} vectors"))
                .with_context("exhaustive vectors")
                .with_note(format!("{bits} input bits give 2^{bits} combinations"))
                .with_help("supply explicit test values to test a subset"),
        );
    }
}

impl Iterator for ExhaustiveVectors {
    type Item = TestVector;

    fn next(&mut self) -> Option<TestVector> {
        if self.exhausted {
            return None;
        }
        let vector = TestVector::new(self.counters.iter().map(|c| c.bits()).collect());
        self.exhausted = increment(&mut self.counters);
        Some(vector)
    }
}

/// Collects the full exhaustive sequence for `inputs`.
///
/// The size warning is emitted before any vector is produced.
pub fn exhaustive_sequence(
    inputs: &[Signal],
    sink: &DiagnosticSink,
) -> Result<TestSequence, GenerateError> {
    let vectors = ExhaustiveVectors::new(inputs)?;
    vectors.report_size(sink);
    Ok(vectors.collect())
}
