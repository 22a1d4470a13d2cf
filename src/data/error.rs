//! Error types for data operations
//!
//! Provides unified error handling for the table store, CSV ingestion,
//! and the exporters.

use crate::types::DataType;
use thiserror::Error;

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// JSON serialization error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV input is empty
    #[error("Empty input")]
    EmptyInput,

    /// No columns found in data
    #[error("No columns found")]
    NoColumns,

    /// Too many rows for eager loading
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// A value does not parse as the column's declared type
    #[error("{value:?} is not a valid {} value", .expected.label())]
    InvalidCell { value: String, expected: DataType },

    /// A row has the wrong number of values for its table
    #[error("Row has {got} values, table expects {expected}")]
    RowArity { expected: usize, got: usize },

    /// A table with this name already exists
    #[error("Table {0:?} already exists")]
    DuplicateTable(String),

    /// No table with this name exists
    #[error("No such table: {0:?}")]
    UnknownTable(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

impl From<String> for DataError {
    fn from(s: String) -> Self {
        DataError::Other(s)
    }
}

impl From<&str> for DataError {
    fn from(s: &str) -> Self {
        DataError::Other(s.to_string())
    }
}
