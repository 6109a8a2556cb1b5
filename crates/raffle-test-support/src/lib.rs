//! Shared test mocks and utilities for the weighted raffle engine.

mod entropy;
mod pacing;
mod rng;

pub use entropy::{EntropyStep, ScriptedEntropy, ZeroEntropy};
pub use pacing::RecordingPacer;
pub use rng::SequenceRng;
