//! Raffle Draw — the weighted drawing engine.
//!
//! Responsible for deriving a non-zero seed, expanding fractional ticket
//! weights into a flat weighted pool, shuffling that pool with a pinned
//! generator, and selecting the winners from the front of the permutation.

pub mod application;
pub mod domain;
