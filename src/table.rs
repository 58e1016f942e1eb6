//! Raw delimited-table reading shared by the record reader.
//!
//! Error classification is tagged rather than message-matched: an empty
//! input is a distinct variant from a structurally malformed one, so callers
//! never inspect parser message text.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from reading a raw CSV table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("File is empty!")]
    Empty,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Malformed(String),
}

/// A parsed delimited file: one header row plus zero or more data rows,
/// all cells whitespace-trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

fn classify_csv_error(err: csv::Error) -> TableError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => TableError::Io(io_err),
        _ => TableError::Malformed(message),
    }
}

/// Read a delimited file into a [`RawTable`].
///
/// A zero-byte file is reported as [`TableError::Empty`]; structural parse
/// failures (unequal row lengths, bad encoding) come back as
/// [`TableError::Malformed`] carrying the parser's message verbatim.
pub fn read_raw_table(path: &Path) -> Result<RawTable, TableError> {
    if fs::metadata(path)?.len() == 0 {
        return Err(TableError::Empty);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(classify_csv_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(classify_csv_error)?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(TableError::Empty);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(classify_csv_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable { headers, rows })
}
