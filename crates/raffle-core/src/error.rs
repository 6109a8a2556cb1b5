//! Draw error types.

use std::io;

use thiserror::Error;

/// Top-level error type for a draw. Every variant is fatal for the run.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The ticket multiplier is outside `[1, 10000]`.
    #[error("multiplier out of range 1 to 10000: {0}")]
    InvalidMultiplier(i64),

    /// A record has an empty participant name.
    #[error("participant name must not be empty")]
    EmptyName,

    /// A record's weight is negative, non-numeric, non-finite or too large.
    #[error("invalid weight {weight:?} for {name:?}: {reason}")]
    InvalidWeight {
        /// The participant the record belongs to.
        name: String,
        /// The weight as it was supplied.
        weight: String,
        /// Why the weight was rejected.
        reason: &'static str,
    },

    /// Every read from the entropy source failed.
    #[error("failed to read entropy source after {attempts} attempts: {source}")]
    EntropySourceUnavailable {
        /// Number of reads attempted.
        attempts: u32,
        /// The last read error.
        #[source]
        source: io::Error,
    },

    /// The entropy source never produced enough bytes.
    #[error("failed to read desired size from entropy source: wanted {wanted} bytes, got {got}")]
    EntropyTruncated {
        /// Bytes required for a seed.
        wanted: usize,
        /// Bytes accumulated before attempts ran out.
        got: usize,
    },

    /// The entropy source only ever returned zero bytes.
    #[error("entropy source failure, 0 returned on all {attempts} attempts")]
    EntropyDegenerate {
        /// Number of reads attempted.
        attempts: u32,
    },
}
