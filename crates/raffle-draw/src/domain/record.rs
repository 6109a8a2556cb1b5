//! Ticket records and the multiplier that scales them.

use std::fmt;

use raffle_core::error::DrawError;
use serde::Serialize;

/// Smallest allowed multiplier.
pub const MIN_MULTIPLIER: u16 = 1;
/// Largest allowed multiplier. 10000 handles weights with four decimal places.
pub const MAX_MULTIPLIER: u16 = 10_000;

/// Integer scale applied to every weight before rounding to a ticket count.
///
/// Only obtainable through [`Multiplier::new`], so a value in hand is always
/// within `[1, 10000]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Multiplier(u16);

impl Multiplier {
    /// Validates `value` as a multiplier.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::InvalidMultiplier` if `value` is outside
    /// `[1, 10000]`. Out-of-range values are never clamped.
    pub fn new(value: i64) -> Result<Self, DrawError> {
        match u16::try_from(value) {
            Ok(m) if (MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&m) => Ok(Self(m)),
            _ => Err(DrawError::InvalidMultiplier(value)),
        }
    }

    /// The validated scale factor.
    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self(MIN_MULTIPLIER)
    }
}

impl TryFrom<i64> for Multiplier {
    type Error = DrawError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One participant and their unscaled ticket weight.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRecord {
    name: String,
    weight: f64,
}

impl TicketRecord {
    /// Creates a record from an already-parsed weight.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::EmptyName` for an empty name and
    /// `DrawError::InvalidWeight` for a negative or non-finite weight.
    pub fn new(name: impl Into<String>, weight: f64) -> Result<Self, DrawError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DrawError::EmptyName);
        }
        let reason = if !weight.is_finite() {
            Some("weight must be finite")
        } else if weight < 0.0 {
            Some("weight must not be negative")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(DrawError::InvalidWeight {
                name,
                weight: weight.to_string(),
                reason,
            });
        }
        Ok(Self { name, weight })
    }

    /// Creates a record from the textual weight column of an input row.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::InvalidWeight` if `weight_text` is not a number,
    /// plus everything [`TicketRecord::new`] rejects.
    pub fn parse(name: impl Into<String>, weight_text: &str) -> Result<Self, DrawError> {
        let name = name.into();
        let Ok(weight) = weight_text.parse::<f64>() else {
            return Err(DrawError::InvalidWeight {
                name,
                weight: weight_text.to_owned(),
                reason: "weight is not a number",
            });
        };
        Self::new(name, weight).map_err(|err| match err {
            DrawError::InvalidWeight { name, reason, .. } => DrawError::InvalidWeight {
                name,
                weight: weight_text.to_owned(),
                reason,
            },
            other => other,
        })
    }

    /// The participant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unscaled weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of tickets this record contributes: `round(weight * multiplier)`,
    /// rounding half away from zero.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::InvalidWeight` if the count does not fit in a `u32`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn ticket_count(&self, multiplier: Multiplier) -> Result<u32, DrawError> {
        let scaled = (self.weight * f64::from(multiplier.get())).round();
        if scaled > f64::from(u32::MAX) {
            return Err(DrawError::InvalidWeight {
                name: self.name.clone(),
                weight: self.weight.to_string(),
                reason: "ticket count too large",
            });
        }
        Ok(scaled as u32)
    }
}
