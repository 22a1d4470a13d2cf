//! Core types for the Queryboard data pipeline.
//!
//! Column types are declared in a schema and cell values are parsed and
//! validated where data enters the system (CSV ingestion, row edits).
//! Downstream stages never re-infer types from display strings.

use crate::data::{DataError, DataResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date formats accepted at the parsing boundary, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

// ============================================================================
// Cells and Columns
// ============================================================================

/// Supported column types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Integer,
    Decimal,
    #[default]
    Text,
    Boolean,
    Date,
}

impl DataType {
    pub fn label(&self) -> &'static str {
        match self {
            DataType::Integer => "Integer",
            DataType::Decimal => "Decimal",
            DataType::Text => "Text",
            DataType::Boolean => "Boolean",
            DataType::Date => "Date",
        }
    }

    pub fn all() -> &'static [DataType] {
        &[
            DataType::Integer,
            DataType::Decimal,
            DataType::Text,
            DataType::Boolean,
            DataType::Date,
        ]
    }
}

/// A single cell value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataCell {
    Integer(i64),
    Decimal(f64),
    Text(String),
    Boolean(bool),
    Date(NaiveDate),
    Null,
}

impl DataCell {
    /// The cell's display string. `Null` renders as the empty string,
    /// whole decimals drop their fraction (`3.0` renders as `"3"`).
    pub fn display(&self) -> String {
        match self {
            DataCell::Integer(i) => i.to_string(),
            DataCell::Decimal(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            DataCell::Text(s) => s.clone(),
            DataCell::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
            DataCell::Date(d) => d.format("%Y-%m-%d").to_string(),
            DataCell::Null => String::new(),
        }
    }

    /// Numeric view of the cell, if it has one. Text participates when it
    /// parses as a finite number; booleans and dates do not.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DataCell::Integer(i) => Some(*i as f64),
            DataCell::Decimal(n) => n.is_finite().then_some(*n),
            DataCell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Calendar-date view of the cell, if it has one.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DataCell::Date(d) => Some(*d),
            DataCell::Text(s) => {
                let trimmed = s.trim();
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            }
            _ => None,
        }
    }

    /// Parse user input against a declared column type.
    ///
    /// Empty input is `Null` for every type. Anything that does not parse
    /// as the declared type is an error, not a silent fallback to text.
    pub fn parse(value: &str, data_type: DataType) -> DataResult<DataCell> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(DataCell::Null);
        }

        let invalid = || DataError::InvalidCell {
            value: trimmed.to_string(),
            expected: data_type,
        };

        match data_type {
            DataType::Integer => trimmed
                .parse::<i64>()
                .map(DataCell::Integer)
                .map_err(|_| invalid()),
            DataType::Decimal => trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(DataCell::Decimal)
                .ok_or_else(invalid),
            DataType::Boolean => match trimmed.to_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(DataCell::Boolean(true)),
                "false" | "no" | "0" => Ok(DataCell::Boolean(false)),
                _ => Err(invalid()),
            },
            DataType::Date => DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .map(DataCell::Date)
                .ok_or_else(invalid),
            DataType::Text => Ok(DataCell::Text(trimmed.to_string())),
        }
    }
}

/// Column metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataColumn {
    /// Column name/header
    pub name: String,
    /// Declared type for this column
    pub data_type: DataType,
    /// Whether this column is the table's primary key
    pub primary_key: bool,
}

impl DataColumn {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            primary_key: false,
        }
    }

    /// Mark this column as the primary key.
    pub fn primary(mut self) -> Self {
        self.primary_key = true;
        self
    }
}

/// A row of data cells, positionally aligned with a column list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    pub cells: Vec<DataCell>,
}

impl DataRow {
    pub fn new(cells: Vec<DataCell>) -> Self {
        Self { cells }
    }

    /// The cell at `index`, treating missing cells as `Null`.
    pub fn cell(&self, index: usize) -> &DataCell {
        static NULL: DataCell = DataCell::Null;
        self.cells.get(index).unwrap_or(&NULL)
    }
}

// ============================================================================
// Result Sets
// ============================================================================

/// The full ordered collection of rows produced by one query execution.
///
/// Replaced wholesale on every execution, never mutated in place; column
/// order is canonical for display. Every row carries exactly
/// `columns.len()` cells.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<DataColumn>,
    pub rows: Vec<DataRow>,
}

impl ResultSet {
    pub fn new(columns: Vec<DataColumn>, rows: Vec<DataRow>) -> Self {
        debug_assert!(
            rows.iter().all(|r| r.cells.len() == columns.len()),
            "row width must match column count"
        );
        Self { columns, rows }
    }

    /// An empty result: no columns, no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}

// ============================================================================
// View Specs
// ============================================================================

/// Sort direction for a result column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort: a column name, or none for identity order.
///
/// Reset whenever a new result set arrives, since its meaning is tied
/// to the previous data shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    /// The unsorted state.
    pub fn none() -> Self {
        Self::default()
    }

    /// Apply a header click: the same column flips
    /// ascending → descending → ascending, a new column starts ascending.
    pub fn toggle(&mut self, column: &str) {
        if self.key.as_deref() == Some(column) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(column.to_string());
            self.direction = SortDirection::Ascending;
        }
    }
}

/// The visible page: 1-based index plus rows per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: crate::constants::DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageSpec {
    /// Page size from the rows that fit in the viewport, clamped to the
    /// configured floor and ceiling. Always lands on page 1.
    pub fn fit(visible_rows: usize) -> Self {
        Self {
            page: 1,
            page_size: visible_rows
                .clamp(crate::constants::MIN_PAGE_SIZE, crate::constants::MAX_PAGE_SIZE),
        }
    }
}

// ============================================================================
// Charts
// ============================================================================

/// Types of charts available
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    Bar,
    Pie,
    Scatter,
}

impl ChartType {
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar",
            ChartType::Pie => "Pie",
            ChartType::Scatter => "Scatter",
        }
    }

    pub fn all() -> &'static [ChartType] {
        &[ChartType::Bar, ChartType::Pie, ChartType::Scatter]
    }
}
