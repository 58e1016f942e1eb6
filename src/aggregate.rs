//! Column-oriented aggregation of timing records.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::record::TimingRecord;

/// The merged view of all valid timing records from one scan.
///
/// Columns are the union of every record's fields; a record that lacks a
/// column contributes an empty string at its position. Keys live in a
/// `BTreeMap`, so the header is always sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateTable {
    columns: BTreeMap<String, Vec<String>>,
    num_rows: usize,
}

impl AggregateTable {
    /// Merge records into a column-oriented table, one row per record in
    /// input order
    pub fn from_records(records: &[TimingRecord]) -> Self {
        let field_union: BTreeSet<&str> = records
            .iter()
            .flat_map(|record| record.field_names())
            .collect();

        let mut columns = BTreeMap::new();
        for field in field_union {
            let column: Vec<String> = records
                .iter()
                .map(|record| record.get(field).unwrap_or("").to_string())
                .collect();
            columns.insert(field.to_string(), column);
        }

        Self {
            columns,
            num_rows: records.len(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Sorted column names
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Write the table as CSV: sorted header row, then one row per record
    /// with cells in the same sorted column order
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("cannot write aggregate CSV '{}'", path.display()))?;

        if !self.columns.is_empty() {
            writer.write_record(self.columns.keys())?;
            for row in 0..self.num_rows {
                writer.write_record(self.columns.values().map(|column| column[row].as_str()))?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
