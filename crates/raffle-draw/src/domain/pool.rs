//! The weighted pool: one entry per ticket.

use raffle_core::error::DrawError;
use tracing::info;

use super::record::{Multiplier, TicketRecord};

/// Flat sequence of participant names where each name appears once per
/// ticket.
///
/// Names from one record are contiguous, and records appear in reverse input
/// order: the last record read comes first. Fixed-seed draws reproduce only if
/// this order is unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedPool {
    entries: Vec<String>,
}

impl WeightedPool {
    /// Expands `records` into a pool, each contributing
    /// `round(weight * multiplier)` copies of its name.
    ///
    /// Every count is validated before anything is allocated, so an error
    /// never leaves a partial pool behind.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::InvalidWeight` if a record's ticket count
    /// overflows.
    pub fn expand(records: &[TicketRecord], multiplier: Multiplier) -> Result<Self, DrawError> {
        let counts = records
            .iter()
            .map(|record| record.ticket_count(multiplier).map(|c| c as usize))
            .collect::<Result<Vec<_>, _>>()?;
        let total: usize = counts.iter().sum();

        let mut entries = Vec::with_capacity(total);
        for (record, &count) in records.iter().zip(&counts).rev() {
            entries.extend(std::iter::repeat_n(record.name().to_owned(), count));
        }

        let pool = Self { entries };
        info!(
            records = records.len(),
            pool_size = pool.len(),
            total_weight = pool.total_weight(multiplier),
            "weighted pool built"
        );
        Ok(pool)
    }

    /// Number of tickets in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool holds no tickets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total ticket weight before scaling: pool size divided by `multiplier`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_weight(&self, multiplier: Multiplier) -> f64 {
        self.entries.len() as f64 / f64::from(multiplier.get())
    }

    /// The pool entries in their current order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [String] {
        &mut self.entries
    }

    /// Consumes the pool, returning its entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl From<Vec<String>> for WeightedPool {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}
