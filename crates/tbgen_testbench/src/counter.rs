//! Mixed-radix odometer counters for exhaustive enumeration.

use crate::vector::to_binary;

/// One odometer digit: an input's current value in `0..=2^width - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    /// Width of the input in bits, at most 64.
    pub width: u32,
    /// Current value.
    pub value: u64,
}

impl Counter {
    /// Creates a counter at zero.
    pub fn new(width: u32) -> Self {
        Self { width, value: 0 }
    }

    /// The largest value this counter reaches, `2^width - 1`.
    pub fn max(self) -> u64 {
        match self.width {
            0 => 0,
            64.. => u64::MAX,
            w => (1u64 << w) - 1,
        }
    }

    /// Returns `true` if the counter is at its maximum.
    pub fn is_max(self) -> bool {
        self.value >= self.max()
    }

    /// The current value as zero-padded binary.
    pub fn bits(self) -> String {
        to_binary(self.value, self.width)
    }
}

/// Advances the odometer by one step.
///
/// The last counter changes fastest. Scanning from the last counter back,
/// counters at their maximum wrap to zero and carry into their left
/// neighbour; the first counter not at its maximum is incremented.
///
/// Returns `true` when every counter was at its maximum, meaning the
/// enumeration is exhausted. The counters are then all back at zero.
pub fn increment(counters: &mut [Counter]) -> bool {
    for counter in counters.iter_mut().rev() {
        if counter.is_max() {
            counter.value = 0;
        } else {
            counter.value += 1;
            return false;
        }
    }
    true
}
