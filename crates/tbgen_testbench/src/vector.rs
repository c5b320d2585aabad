//! Test vectors and fixed-width binary formatting.

use crate::signal::Signal;

/// One timed assignment of a binary value to every input, in input order.
///
/// Each value has exactly as many digits as its input's width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestVector {
    values: Vec<String>,
}

impl TestVector {
    /// Creates a vector from already width-exact binary strings.
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// The binary values, parallel to the input list.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Pairs each value with its input's name.
    pub fn assignments<'a>(
        &'a self,
        inputs: &'a [Signal],
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        inputs
            .iter()
            .zip(&self.values)
            .map(|(signal, value)| (signal.name.as_str(), value.as_str()))
    }
}

/// The ordered list of vectors applied to the unit, one per time step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestSequence {
    vectors: Vec<TestVector>,
}

impl TestSequence {
    /// Number of vectors.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns `true` if the sequence has no vectors.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Iterates vectors in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, TestVector> {
        self.vectors.iter()
    }

    /// The first vector applied, if any.
    pub fn first(&self) -> Option<&TestVector> {
        self.vectors.first()
    }

    /// The last vector applied, if any.
    pub fn last(&self) -> Option<&TestVector> {
        self.vectors.last()
    }
}

impl FromIterator<TestVector> for TestSequence {
    fn from_iter<T: IntoIterator<Item = TestVector>>(iter: T) -> Self {
        Self {
            vectors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TestSequence {
    type Item = &'a TestVector;
    type IntoIter = std::slice::Iter<'a, TestVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

/// Renders `value` as unsigned binary, zero-padded to `width` digits.
///
/// A zero-width counter still renders as a single `0`.
pub fn to_binary(value: u64, width: u32) -> String {
    format!("{value:0w$b}", w = width as usize)
}

/// Left-pads `bits` with zeros to exactly `width` digits.
///
/// Surplus leading zeros are dropped, since that keeps the value intact.
/// Returns `None` if the value has more significant bits than `width`.
pub fn pad_to_width(bits: &str, width: u32) -> Option<String> {
    let width = width as usize;
    if bits.len() <= width {
        return Some(format!("{bits:0>width$}"));
    }
    let (surplus, kept) = bits.split_at(bits.len() - width);
    surplus.bytes().all(|b| b == b'0').then(|| kept.to_string())
}

/// Number of significant bits in a binary string (at least one).
pub fn significant_bits(bits: &str) -> usize {
    bits.trim_start_matches('0').len().max(1)
}

/// A sized Verilog binary literal, e.g. `4'b1010`.
pub fn literal(width: u32, bits: &str) -> String {
    format!("{width}'b{bits}")
}
