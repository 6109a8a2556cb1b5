//! Test RNG — deterministic `DeterministicRng` implementation for tests.

use raffle_core::rng::DeterministicRng;

/// An RNG that returns indices from a predetermined sequence. Panics if the
/// sequence is exhausted or a scripted index is out of bounds. Used in tests
/// that need a specific, hand-checked permutation.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<usize>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given index sequence.
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u64(&mut self) -> u64 {
        let val = self.values[self.index];
        self.index += 1;
        val as u64
    }

    fn next_index(&mut self, bound: usize) -> usize {
        let val = self.values[self.index];
        assert!(val < bound, "scripted index {val} out of bound {bound}");
        self.index += 1;
        val
    }
}
