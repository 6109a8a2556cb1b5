//! Winner selection from the front of a shuffled pool.

use serde::Serialize;

use super::pool::WeightedPool;

/// Ordered winners of a draw.
///
/// A participant holding several tickets can occupy several positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DrawResult {
    winners: Vec<String>,
}

impl DrawResult {
    /// Winners in draw order.
    #[must_use]
    pub fn winners(&self) -> &[String] {
        &self.winners
    }

    /// Number of winners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.winners.len()
    }

    /// Whether nobody won.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    /// Consumes the result, returning the winners.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.winners
    }
}

impl IntoIterator for DrawResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.winners.into_iter()
    }
}

/// Takes the first `min(n, len)` entries of `shuffled`, preserving order.
/// Asking for more winners than tickets is not an error.
#[must_use]
pub fn select(shuffled: WeightedPool, n: usize) -> DrawResult {
    let mut winners = shuffled.into_vec();
    winners.truncate(n);
    DrawResult { winners }
}
