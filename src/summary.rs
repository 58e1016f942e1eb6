//! The `summarize` subcommand: typed re-reading of an aggregate build-stats
//! CSV and per-field summary reporting.
//!
//! Unlike the per-file record reader, schema errors here are not recovered:
//! a schema mismatch invalidates the whole read, so they propagate out.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::cli::OutputFormat;
use crate::column::{standard_build_stats_columns, ColumnSpec, ColumnType};

/// Errors from typed reading of a multi-row CSV file
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error(
        "the CSV file column header '{column}' does not exist in the list of \
         column headers {headers:?} from the CSV file '{path}'!"
    )]
    SchemaColumnMissing {
        path: String,
        column: String,
        headers: Vec<String>,
    },

    #[error("data row {row} of '{path}' has no cell at index {index} for column '{column}'")]
    MissingCell {
        path: String,
        row: usize,
        index: usize,
        column: String,
    },

    #[error(
        "{path}: For field '{field}' the string value '{value}' could not be \
         converted to the expected type '{expected}'!"
    )]
    TypeConversion {
        path: String,
        field: String,
        value: String,
        expected: ColumnType,
    },
}

/// One column of values converted to its declared type
#[derive(Debug, Clone, PartialEq)]
pub enum TypedColumn {
    Str(Vec<String>),
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl TypedColumn {
    fn with_type(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::String => TypedColumn::Str(Vec::new()),
            ColumnType::Int => TypedColumn::Int(Vec::new()),
            ColumnType::Float => TypedColumn::Float(Vec::new()),
        }
    }

    /// Convert and append a raw cell; on failure reports the expected type
    fn push_raw(&mut self, raw: &str) -> Result<(), ColumnType> {
        match self {
            TypedColumn::Str(values) => {
                values.push(raw.to_string());
                Ok(())
            }
            TypedColumn::Int(values) => {
                let value = raw.parse::<i64>().map_err(|_| ColumnType::Int)?;
                values.push(value);
                Ok(())
            }
            TypedColumn::Float(values) => {
                let value = raw.parse::<f64>().map_err(|_| ColumnType::Float)?;
                values.push(value);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TypedColumn::Str(values) => values.len(),
            TypedColumn::Int(values) => values.len(),
            TypedColumn::Float(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_str(&self) -> Option<&[String]> {
        match self {
            TypedColumn::Str(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<&[i64]> {
        match self {
            TypedColumn::Int(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<&[f64]> {
        match self {
            TypedColumn::Float(values) => Some(values),
            _ => None,
        }
    }
}

/// Typed columns from one CSV file, in schema order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedColumnTable {
    columns: Vec<(String, TypedColumn)>,
}

impl TypedColumnTable {
    pub fn column(&self, name: &str) -> Option<&TypedColumn> {
        self.columns
            .iter()
            .find(|(column_name, _)| column_name == name)
            .map(|(_, column)| column)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns
            .first()
            .map(|(_, column)| column.len())
            .unwrap_or(0)
    }
}

/// Read a multi-row CSV file, converting the schema's columns to their
/// declared types.
///
/// Every schema column must appear in the header row; extra file columns are
/// ignored. Row/header length agreement is deliberately not enforced, but a
/// row too short to hold a resolved column is a structured error rather than
/// a panic. Blank lines are skipped.
pub fn read_typed_columns(
    path: &Path,
    schema: &[ColumnSpec],
) -> Result<TypedColumnTable, SummaryError> {
    let path_str = path.display().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut resolved_indices = Vec::with_capacity(schema.len());
    for spec in schema {
        let index = headers.iter().position(|header| *header == spec.name);
        match index {
            Some(index) => resolved_indices.push(index),
            None => {
                return Err(SummaryError::SchemaColumnMissing {
                    path: path_str,
                    column: spec.name.clone(),
                    headers,
                })
            }
        }
    }

    let mut columns: Vec<(String, TypedColumn)> = schema
        .iter()
        .map(|spec| (spec.name.clone(), TypedColumn::with_type(spec.column_type)))
        .collect();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        for (&index, (name, column)) in resolved_indices.iter().zip(columns.iter_mut()) {
            let raw = record.get(index).ok_or_else(|| SummaryError::MissingCell {
                path: path_str.clone(),
                row,
                index,
                column: name.clone(),
            })?;
            column
                .push_raw(raw)
                .map_err(|expected| SummaryError::TypeConversion {
                    path: path_str.clone(),
                    field: name.clone(),
                    value: raw.to_string(),
                    expected,
                })?;
        }
    }

    Ok(TypedColumnTable { columns })
}

/// Read an aggregate CSV with the standard build-stats schema
pub fn read_build_stats(path: &Path) -> Result<TypedColumnTable, SummaryError> {
    read_typed_columns(path, &standard_build_stats_columns())
}

/// Summary statistics for one numeric build-stats field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    pub field: String,
    pub count: usize,
    pub sum: f64,
    pub max: f64,
    pub max_file_name: String,
}

/// Compute count/sum/max for a float column, naming the file that holds the
/// maximum. Returns `None` for an empty or non-float column.
pub fn summarize_field(table: &TypedColumnTable, field: &str) -> Option<FieldSummary> {
    let values = table.column(field)?.as_float()?;
    let file_names = table.column("FileName")?.as_str()?;
    if values.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    let mut max_index = 0;
    for (index, &value) in values.iter().enumerate() {
        sum += value;
        if value > values[max_index] {
            max_index = index;
        }
    }

    Some(FieldSummary {
        field: field.to_string(),
        count: values.len(),
        sum,
        max: values[max_index],
        max_file_name: file_names.get(max_index).cloned().unwrap_or_default(),
    })
}

const SUMMARY_FIELDS: [&str; 3] = ["FileSize", "elapsed_real_time_sec", "max_resident_size_Kb"];

/// Run the `summarize` subcommand end to end
pub fn run(csv_file: &Path, format: OutputFormat) -> Result<()> {
    let table = read_build_stats(csv_file)?;
    let summaries: Vec<FieldSummary> = SUMMARY_FIELDS
        .iter()
        .filter_map(|field| summarize_field(&table, field))
        .collect();

    match format {
        OutputFormat::Text => {
            println!(
                "Build stats summary from {} ({} entries):",
                csv_file.display(),
                table.num_rows()
            );
            println!();
            for summary in &summaries {
                println!(
                    "  {}: count = {}, sum = {}, max = {} ({})",
                    summary.field, summary.count, summary.sum, summary.max, summary.max_file_name
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
    }
    Ok(())
}
