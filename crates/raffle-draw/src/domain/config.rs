//! Draw configuration, validated once before a draw starts.

use raffle_core::error::DrawError;

use super::record::Multiplier;

/// Everything the engine needs to know about a draw besides its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawConfig {
    /// Explicit seed, or `0` to derive one from entropy.
    pub seed: i64,
    /// Ticket multiplier.
    pub multiplier: Multiplier,
    /// Number of winners to report.
    pub winners: usize,
}

impl DrawConfig {
    /// Builds a configuration, validating the multiplier.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::InvalidMultiplier` if `multiplier` is outside
    /// `[1, 10000]`.
    pub fn new(seed: i64, multiplier: i64, winners: usize) -> Result<Self, DrawError> {
        Ok(Self {
            seed,
            multiplier: Multiplier::new(multiplier)?,
            winners,
        })
    }
}
