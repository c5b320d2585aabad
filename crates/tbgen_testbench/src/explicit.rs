//! Caller-supplied test vectors.

use tbgen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

use crate::config::MismatchPolicy;
use crate::error::GenerateError;
use crate::signal::Signal;
use crate::vector::{pad_to_width, significant_bits, TestSequence, TestVector};

/// Emitted when a trailing partial test is dropped under [`MismatchPolicy::Truncate`].
pub const PARTIAL_TEST_DROPPED: DiagnosticCode = DiagnosticCode::new(Category::Warning, 102);

/// Splits a flat list of values into tests of `per_test` values each.
///
/// A count that is not a multiple of `per_test` fails under
/// [`MismatchPolicy::Error`]. Under [`MismatchPolicy::Truncate`] the trailing
/// partial test is dropped and a warning is emitted into `sink`.
pub fn group_values(
    values: &[String],
    per_test: usize,
    policy: MismatchPolicy,
    sink: &DiagnosticSink,
) -> Result<Vec<Vec<String>>, GenerateError> {
    if per_test == 0 {
        return Err(GenerateError::NoInputs);
    }

    let leftover = values.len() % per_test;
    if leftover != 0 {
        match policy {
            MismatchPolicy::Error => {
                return Err(GenerateError::PartialTest {
                    supplied: values.len(),
                    per_test,
                });
            }
            MismatchPolicy::Truncate => sink.emit(
                Diagnostic::warning(
                    PARTIAL_TEST_DROPPED,
                    format!("dropping {leftover} trailing test value(s)"),
                )
                .with_context("test values")
                .with_note(format!(
                    "{} value(s) supplied for {per_test} input(s) per test",
                    values.len()
                ))
                .with_help("supply one value per input for every test"),
            ),
        }
    }

    Ok(values.chunks_exact(per_test).map(<[String]>::to_vec).collect())
}

/// Builds one vector per test tuple, zero-padding each value to its input's width.
///
/// `tests` hold binary strings already produced by [`normalize`](crate::radix::normalize),
/// one per input in declared order. Values are never truncated: a value with
/// more significant bits than its input fails with
/// [`GenerateError::ValueTooWide`].
pub fn explicit_sequence(
    inputs: &[Signal],
    tests: &[Vec<String>],
) -> Result<TestSequence, GenerateError> {
    tests
        .iter()
        .enumerate()
        .map(|(index, test)| {
            if test.len() != inputs.len() {
                return Err(GenerateError::TupleArity {
                    test: index + 1,
                    supplied: test.len(),
                    expected: inputs.len(),
                });
            }
            let values = inputs
                .iter()
                .zip(test)
                .map(|(signal, value)| {
                    pad_to_width(value, signal.width()).ok_or_else(|| {
                        GenerateError::ValueTooWide {
                            name: signal.name.clone(),
                            value: value.clone(),
                            needed: significant_bits(value),
                            width: signal.width(),
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TestVector::new(values))
        })
        .collect()
}
