//! Raffle CLI — application error types.

use std::io;
use std::path::PathBuf;

use raffle_core::error::DrawError;
use thiserror::Error;

/// Exit code used when the input file cannot be opened.
pub const EXIT_INPUT_UNAVAILABLE: u8 = 13;

/// Everything that can stop a run of the `raffle` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// The supplied options do not form a valid draw configuration.
    #[error("configuration error: {0}")]
    Config(#[source] DrawError),

    /// The input file could not be opened.
    #[error("unable to open input file {}: {source}", .path.display())]
    InputUnavailable {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input is not well-formed CSV.
    #[error("input error: {0}")]
    Csv(#[from] csv::Error),

    /// A row does not have exactly two columns.
    #[error("input error on line {line}: expected 2 fields, found {found}")]
    FieldCount {
        /// One-based line number of the row.
        line: u64,
        /// Number of fields present.
        found: usize,
    },

    /// A row parsed as CSV but is not a valid ticket record.
    #[error("input error on line {line}: {source}")]
    Record {
        /// One-based line number of the row.
        line: u64,
        /// Why the record was rejected.
        #[source]
        source: DrawError,
    },

    /// The draw itself failed.
    #[error(transparent)]
    Draw(#[from] DrawError),

    /// Writing results failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),

    /// Encoding results as JSON failed.
    #[error("output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InputUnavailable { .. } => EXIT_INPUT_UNAVAILABLE,
            _ => 1,
        }
    }
}
