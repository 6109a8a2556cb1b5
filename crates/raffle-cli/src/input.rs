//! Input opening and CSV record reading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use raffle_draw::domain::record::TicketRecord;
use tracing::debug;

use crate::error::AppError;

/// Opens `path`, or returns `stdin` when no path is given.
///
/// # Errors
///
/// Returns `AppError::InputUnavailable` if the file cannot be opened.
pub fn open_input<'a>(
    path: Option<&Path>,
    stdin: Box<dyn Read + 'a>,
) -> Result<Box<dyn Read + 'a>, AppError> {
    let Some(path) = path else {
        debug!("reading records from standard input");
        return Ok(stdin);
    };
    let file = File::open(path).map_err(|source| AppError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading records from file");
    Ok(Box::new(BufReader::new(file)))
}

/// Reads two-column `name,tickets` rows. Lines starting with `#` are
/// comments, there is no header row, and leading whitespace of each field is
/// ignored.
///
/// # Errors
///
/// Returns `AppError::Csv` for malformed CSV, `AppError::FieldCount` for a
/// row without exactly two fields, and `AppError::Record` for an invalid
/// name or weight. The first error stops reading.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TicketRecord>, AppError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv.records() {
        let row = row?;
        let line = row.position().map_or(0, csv::Position::line);
        if row.len() != 2 {
            return Err(AppError::FieldCount {
                line,
                found: row.len(),
            });
        }
        let record = TicketRecord::parse(row[0].trim_start(), row[1].trim_start())
            .map_err(|source| AppError::Record { line, source })?;
        records.push(record);
    }
    debug!(records = records.len(), "records read");
    Ok(records)
}
