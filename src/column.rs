//! Column schema declarations for typed CSV reading.

use std::fmt;

/// Value type a CSV column is declared to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Raw string passthrough
    String,
    /// Signed integer (`i64`)
    Int,
    /// Floating point (`f64`)
    Float,
}

impl ColumnType {
    /// Check whether a raw cell value converts to this type
    pub fn parses(self, raw: &str) -> bool {
        match self {
            ColumnType::String => true,
            ColumnType::Int => raw.parse::<i64>().is_ok(),
            ColumnType::Float => raw.parse::<f64>().is_ok(),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::String => "string",
            ColumnType::Int => "int",
            ColumnType::Float => "float",
        };
        write!(f, "{}", name)
    }
}

/// A column name together with its declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// The standard build-stats columns every timing record must carry.
///
/// The order is fixed: validation walks this list and reports the first
/// failure only.
pub fn standard_build_stats_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("max_resident_size_Kb", ColumnType::Float),
        ColumnSpec::new("elapsed_real_time_sec", ColumnType::Float),
        ColumnSpec::new("FileName", ColumnType::String),
        ColumnSpec::new("FileSize", ColumnType::Float),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_parses_anything() {
        assert!(ColumnType::String.parses("anything at all"));
        assert!(ColumnType::String.parses(""));
    }

    #[test]
    fn test_int_parses() {
        assert!(ColumnType::Int.parses("12"));
        assert!(ColumnType::Int.parses("-3"));
        assert!(!ColumnType::Int.parses("12.5"));
        assert!(!ColumnType::Int.parses("bad"));
    }

    #[test]
    fn test_float_parses() {
        assert!(ColumnType::Float.parses("10.5"));
        assert!(ColumnType::Float.parses("3300000"));
        assert!(!ColumnType::Float.parses("bad size type"));
    }

    #[test]
    fn test_column_type_display() {
        assert_eq!(ColumnType::String.to_string(), "string");
        assert_eq!(ColumnType::Int.to_string(), "int");
        assert_eq!(ColumnType::Float.to_string(), "float");
    }

    #[test]
    fn test_standard_columns_fixed_order() {
        let cols = standard_build_stats_columns();
        let names: Vec<&str> = cols.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "max_resident_size_Kb",
                "elapsed_real_time_sec",
                "FileName",
                "FileSize"
            ]
        );
        assert_eq!(cols[2].column_type, ColumnType::String);
        assert_eq!(cols[3].column_type, ColumnType::Float);
    }
}
