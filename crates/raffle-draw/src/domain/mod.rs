//! Domain model for the draw engine.

pub mod config;
pub mod pool;
pub mod record;
pub mod seed;
pub mod selection;
pub mod shuffle;
