//! Seed derivation from an explicit value or an entropy source.

use std::io;
use std::time::Duration;

use raffle_core::entropy::EntropySource;
use raffle_core::error::DrawError;
use raffle_core::pacing::Pacer;
use serde::Serialize;
use tracing::{debug, warn};

/// Number of entropy bytes folded into a seed.
pub const SEED_BYTES: usize = 8;

/// Default cap on entropy reads per derivation.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;

/// The seed that drives a draw's permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Seed {
    /// Seed value; never `0`.
    pub value: i64,
    /// Whether the value came from the entropy source.
    pub from_entropy: bool,
}

/// Derives a non-zero seed, reading entropy only when no explicit seed is
/// given.
#[derive(Debug, Clone, Copy)]
pub struct SeedDeriver {
    max_attempts: u32,
}

impl Default for SeedDeriver {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SeedDeriver {
    /// A deriver allowing at most `max_attempts` entropy reads (minimum 1).
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// Returns `explicit_seed` verbatim when it is non-zero. Otherwise reads
    /// [`SEED_BYTES`] bytes from `entropy` and interprets them as a
    /// big-endian `i64`.
    ///
    /// Reads may be short; bytes accumulate across attempts. A chunk made
    /// only of zero bytes is discarded, so the derived seed is never `0`.
    /// Before the `i`-th retry the deriver pauses `i` milliseconds.
    ///
    /// # Errors
    ///
    /// Once the attempt cap is reached:
    /// - `DrawError::EntropyTruncated` if some bytes were gathered but not
    ///   enough;
    /// - `DrawError::EntropySourceUnavailable` if nothing was gathered and a
    ///   read failed;
    /// - `DrawError::EntropyDegenerate` if the source only returned zeros.
    pub fn derive(
        &self,
        explicit_seed: i64,
        entropy: &mut dyn EntropySource,
        pacer: &dyn Pacer,
    ) -> Result<Seed, DrawError> {
        if explicit_seed != 0 {
            debug!(seed = explicit_seed, "using explicit seed");
            return Ok(Seed {
                value: explicit_seed,
                from_entropy: false,
            });
        }

        let mut bytes = [0u8; SEED_BYTES];
        let mut filled = 0;
        let mut attempts = 0;
        let mut last_error: Option<io::Error> = None;
        let mut saw_zero_chunk = false;

        while filled < SEED_BYTES {
            if attempts == self.max_attempts {
                return Err(exhausted(attempts, filled, last_error, saw_zero_chunk));
            }
            if attempts > 0 {
                pacer.pause(Duration::from_millis(u64::from(attempts)));
            }
            attempts += 1;

            match entropy.read(&mut bytes[filled..]) {
                Err(e) => {
                    warn!(attempt = attempts, error = %e, "entropy read failed");
                    last_error = Some(e);
                }
                Ok(n) => {
                    let n = n.min(SEED_BYTES - filled);
                    let chunk = &bytes[filled..filled + n];
                    if n > 0 && chunk.iter().all(|&b| b == 0) {
                        warn!(attempt = attempts, len = n, "discarding all-zero entropy chunk");
                        saw_zero_chunk = true;
                    } else {
                        filled += n;
                        debug!(attempt = attempts, len = n, filled, "entropy chunk accepted");
                    }
                }
            }
        }

        let value = i64::from_be_bytes(bytes);
        debug!(seed = value, attempts, "seed derived from entropy");
        Ok(Seed {
            value,
            from_entropy: true,
        })
    }
}

fn exhausted(
    attempts: u32,
    filled: usize,
    last_error: Option<io::Error>,
    saw_zero_chunk: bool,
) -> DrawError {
    match last_error {
        _ if filled > 0 => DrawError::EntropyTruncated {
            wanted: SEED_BYTES,
            got: filled,
        },
        Some(source) => DrawError::EntropySourceUnavailable { attempts, source },
        None if saw_zero_chunk => DrawError::EntropyDegenerate { attempts },
        None => DrawError::EntropyTruncated {
            wanted: SEED_BYTES,
            got: 0,
        },
    }
}
