//! Result printing.

use std::io::Write;

use raffle_draw::application::command_handlers::DrawOutcome;
use serde::Serialize;

use crate::config::Configuration;
use crate::error::AppError;

/// Writes the human-readable report: configuration, total weight, then one
/// winner per line.
///
/// # Errors
///
/// Returns `AppError::Output` if writing fails.
pub fn write_text(
    out: &mut dyn Write,
    configuration: &Configuration,
    outcome: &DrawOutcome,
) -> Result<(), AppError> {
    writeln!(out, "Configuration: {{{configuration}}}")?;
    writeln!(out, "Total {}", outcome.total_weight)?;
    writeln!(out, "Results")?;
    for name in outcome.winners.winners() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    configuration: &'a Configuration,
    pool_size: usize,
    total: f64,
    winners: &'a [String],
}

/// Writes the report as one pretty-printed JSON document.
///
/// # Errors
///
/// Returns `AppError::Json` or `AppError::Output` if encoding or writing
/// fails.
pub fn write_json(
    out: &mut dyn Write,
    configuration: &Configuration,
    outcome: &DrawOutcome,
) -> Result<(), AppError> {
    let report = JsonReport {
        configuration,
        pool_size: outcome.pool_size,
        total: outcome.total_weight,
        winners: outcome.winners.winners(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
