//! Command handlers for the draw engine.
//!
//! This module contains the application-level entry point that runs one
//! draw end to end: derive seed, expand tickets, shuffle, select.

use raffle_core::entropy::EntropySource;
use raffle_core::error::DrawError;
use raffle_core::pacing::Pacer;
use serde::Serialize;
use tracing::{info, instrument};

use crate::domain::config::DrawConfig;
use crate::domain::pool::WeightedPool;
use crate::domain::record::TicketRecord;
use crate::domain::seed::{Seed, SeedDeriver};
use crate::domain::selection::{DrawResult, select};
use crate::domain::shuffle::shuffle;

/// Everything a completed draw reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawOutcome {
    /// The seed that drove the permutation.
    pub seed: Seed,
    /// Tickets in the pool after scaling.
    pub pool_size: usize,
    /// Total ticket weight before scaling.
    pub total_weight: f64,
    /// The winners, in draw order.
    pub winners: DrawResult,
}

/// Handles one draw: derives the seed, builds the weighted pool from
/// `records`, shuffles it and selects `config.winners` entries.
///
/// Either a complete outcome is returned or nothing is.
///
/// # Errors
///
/// Returns the `DrawError` of the first stage that fails: seed derivation
/// (entropy errors) or pool construction (`InvalidWeight`).
#[instrument(
    skip_all,
    fields(multiplier = %config.multiplier, winners = config.winners, records = records.len())
)]
pub fn handle_draw(
    config: &DrawConfig,
    records: &[TicketRecord],
    entropy: &mut dyn EntropySource,
    pacer: &dyn Pacer,
) -> Result<DrawOutcome, DrawError> {
    let seed = SeedDeriver::default().derive(config.seed, entropy, pacer)?;

    let pool = WeightedPool::expand(records, config.multiplier)?;
    let pool_size = pool.len();
    let total_weight = pool.total_weight(config.multiplier);

    let winners = select(shuffle(seed.value, pool), config.winners);

    info!(
        seed = seed.value,
        from_entropy = seed.from_entropy,
        pool_size,
        selected = winners.len(),
        "draw completed"
    );

    Ok(DrawOutcome {
        seed,
        pool_size,
        total_weight,
        winners,
    })
}
