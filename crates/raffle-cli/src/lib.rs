//! Raffle CLI — configuration, input and output around the draw engine.
//!
//! The binary in `main.rs` wires real stdin/stdout, the operating system
//! entropy source and a sleeping pacer into [`run`]; tests inject their own.

pub mod config;
pub mod error;
pub mod input;
pub mod output;

use std::io::{Read, Write};

use raffle_core::entropy::EntropySource;
use raffle_core::pacing::Pacer;
use raffle_draw::application::command_handlers::handle_draw;
use tracing::info;

use crate::config::{Cli, Configuration, OutputFormat};
use crate::error::AppError;

/// Runs one draw as described by `cli`, writing the report to `out`.
///
/// Nothing is written unless the whole draw succeeds.
///
/// # Errors
///
/// Returns `AppError` for invalid configuration, unreadable or malformed
/// input, draw failures, or output failures.
pub fn run<'a>(
    cli: &Cli,
    entropy: &mut dyn EntropySource,
    pacer: &dyn Pacer,
    stdin: Box<dyn Read + 'a>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let config = cli.draw_config()?;
    let reader = input::open_input(cli.input_path(), stdin)?;
    let records = input::read_records(reader)?;

    info!(records = records.len(), "starting draw");
    let outcome = handle_draw(&config, &records, entropy, pacer)?;
    let configuration = Configuration::new(cli, &config, outcome.seed);

    match cli.format {
        OutputFormat::Text => output::write_text(out, &configuration, &outcome)?,
        OutputFormat::Json => output::write_json(out, &configuration, &outcome)?,
    }
    out.flush()?;
    Ok(())
}
