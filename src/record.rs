//! Robust reading of per-target timing files.
//!
//! A timing file is a CSV with a header row and exactly one data row,
//! produced by the build wrapper for every compiled target. Files can be
//! truncated or garbled when a build is interrupted, so reading is defensive:
//! every failure mode maps to a [`ReadError`] and the caller decides whether
//! to skip the file or stop.

use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::column::{standard_build_stats_columns, ColumnType};
use crate::table::{self, TableError};

/// One build target's resource-usage measurements, keyed by column name.
///
/// Values stay as raw strings; typed conversion happens later on the
/// aggregate (see [`crate::summary`]). Keys are kept sorted so iteration is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingRecord {
    fields: BTreeMap<String, String>,
}

impl TimingRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Column names present in this record, in sorted order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for TimingRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Reasons a timing file fails to yield a valid record.
///
/// Display strings are the tool's user-facing diagnostics and are stable:
/// downstream CI log scrapers match on them.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{path}: ERROR: File does not exist!")]
    MissingFile { path: String },

    #[error("{path}: ERROR: File is empty!")]
    EmptyFile { path: String },

    #[error("{path}: ERROR: {message}")]
    MalformedFile { path: String, message: String },

    #[error("{path}: ERROR: Contains {rows} != 1 data rows!")]
    WrongRowCount { path: String, rows: usize },

    #[error("{path}: ERROR: The required field '{field}' is missing!")]
    MissingRequiredField { path: String, field: String },

    #[error(
        "{path}: ERROR: For field '{field}' the string value '{value}' \
         could not be converted to the expected type '{expected}'!"
    )]
    TypeConversion {
        path: String,
        field: String,
        value: String,
        expected: ColumnType,
    },
}

/// Read one timing file into a validated [`TimingRecord`].
///
/// Checks, in order: the file exists, parses as a table, contains exactly one
/// data row, and carries every standard build-stats column with a value
/// convertible to its declared type. Validation stops at the first failure.
pub fn read_timing_record(path: &Path) -> Result<TimingRecord, ReadError> {
    let path_str = path.display().to_string();

    if !path.exists() {
        return Err(ReadError::MissingFile { path: path_str });
    }

    let table = table::read_raw_table(path).map_err(|err| match err {
        TableError::Empty => ReadError::EmptyFile {
            path: path_str.clone(),
        },
        other => ReadError::MalformedFile {
            path: path_str.clone(),
            message: other.to_string(),
        },
    })?;

    if table.num_rows() != 1 {
        return Err(ReadError::WrongRowCount {
            path: path_str,
            rows: table.num_rows(),
        });
    }

    let record: TimingRecord = table
        .headers
        .iter()
        .cloned()
        .zip(table.rows[0].iter().cloned())
        .collect();

    validate_required_fields(&record, &path_str)?;

    Ok(record)
}

fn validate_required_fields(record: &TimingRecord, path: &str) -> Result<(), ReadError> {
    for spec in standard_build_stats_columns() {
        let value = record
            .get(&spec.name)
            .ok_or_else(|| ReadError::MissingRequiredField {
                path: path.to_string(),
                field: spec.name.clone(),
            })?;
        if !spec.column_type.parses(value) {
            return Err(ReadError::TypeConversion {
                path: path.to_string(),
                field: spec.name,
                value: value.to_string(),
                expected: spec.column_type,
            });
        }
    }
    Ok(())
}
