//! Random number generator abstraction for determinism.
//!
//! In production, draws use the pinned [`SplitMix64`] generator so a seed
//! reproduces the same permutation on every platform. In tests, a scripted
//! implementation is injected.

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate the next raw 64-bit output.
    fn next_u64(&mut self) -> u64;

    /// Generate an index uniformly distributed in `[0, bound)`.
    ///
    /// Uses Lemire's multiply-and-reject method, which is unbiased and
    /// consumes exactly one output in the common case.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    #[allow(clippy::cast_possible_truncation)]
    fn next_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        let bound = bound as u64;
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let product = u128::from(self.next_u64()) * u128::from(bound);
            if product as u64 >= threshold {
                return (product >> 64) as usize;
            }
        }
    }
}

/// SplitMix64, the 64-bit generator from Steele, Lea and Flood (2014).
///
/// Every output is a fixed function of the seed and the call count, with no
/// dependency on platform or library version.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator from raw seed bits.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a generator from a signed draw seed, reinterpreting its
    /// two's-complement bits.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_seed(seed: i64) -> Self {
        Self::new(seed as u64)
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}
