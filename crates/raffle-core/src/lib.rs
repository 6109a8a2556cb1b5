//! Raffle Core — shared abstractions for the weighted raffle engine.
//!
//! This crate defines the error taxonomy and the traits through which the
//! engine reaches the outside world (entropy, pacing) or consumes
//! randomness. It contains no draw logic.

pub mod entropy;
pub mod error;
pub mod pacing;
pub mod rng;
