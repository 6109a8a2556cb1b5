//! Application layer for the draw engine.

pub mod command_handlers;
