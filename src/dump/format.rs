//! Output formatting for tidy tables
//!
//! The table has two serialized surfaces: delimited text with a
//! `shape,x,y` header row, and JSON. Format names are parsed from strings
//! so callers can thread a user-supplied format through unchanged.

use crate::dump::table::TidyTable;
use std::fmt;

/// Supported output formats for a tidy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Parse a format name like "csv" or "json".
    pub fn from_string(name: &str) -> Result<Self, FormatError> {
        match name {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }

    /// All available format names.
    pub fn available() -> &'static [&'static str] {
        &["csv", "json"]
    }
}

/// Errors that can occur while formatting a table
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    UnknownFormat(String),
    Serialize(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "unknown output format: {}", name),
            FormatError::Serialize(msg) => write!(f, "serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

/// Render a table in the requested format.
pub fn render_table(table: &TidyTable, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Csv => Ok(table.to_csv()),
        OutputFormat::Json => table
            .to_json()
            .map_err(|err| FormatError::Serialize(err.to_string())),
    }
}
