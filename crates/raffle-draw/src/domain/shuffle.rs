//! Seeded Fisher–Yates shuffle of the weighted pool.
//!
//! Draws use [`SplitMix64`] seeded with the draw seed's two's-complement bits
//! and Lemire's bounded index draw (see [`DeterministicRng::next_index`]).
//! Both live in this workspace, so a seed reproduces the same permutation on
//! every platform and release.

use raffle_core::rng::{DeterministicRng, SplitMix64};
use tracing::debug;

use super::pool::WeightedPool;

/// Shuffles `pool` in place with the pinned generator seeded by `seed`, and
/// returns it for chaining.
#[must_use]
pub fn shuffle(seed: i64, mut pool: WeightedPool) -> WeightedPool {
    let mut rng = SplitMix64::from_seed(seed);
    shuffle_with(&mut rng, pool.entries_mut());
    debug!(seed, pool_size = pool.len(), "pool shuffled");
    pool
}

/// Fisher–Yates: for `i` from the last index down to 1, swap `items[i]` with
/// `items[j]` where `j` is uniform in `[0, i]`.
pub fn shuffle_with<T, R>(rng: &mut R, items: &mut [T])
where
    R: DeterministicRng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}
