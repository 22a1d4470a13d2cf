//! The authoritative table store.
//!
//! One owner for every table's schema and rows. The UI, the query
//! executor, and the view pipeline all read derived snapshots; nothing
//! else holds a writable copy, so there is no second store to fall out
//! of sync with.

use crate::constants::TABLE_PREVIEW_ROWS;
use crate::data::csv_parser::parse_csv;
use crate::data::error::{DataError, DataResult};
use crate::types::{DataCell, DataColumn, DataRow, ResultSet};

/// A named table: declared schema plus rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<DataColumn>,
    pub rows: Vec<DataRow>,
}

impl Table {
    pub fn new(name: &str, columns: Vec<DataColumn>) -> Self {
        Self {
            name: name.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    fn to_result(&self, limit: Option<usize>) -> ResultSet {
        let rows = match limit {
            Some(n) => self.rows.iter().take(n).cloned().collect(),
            None => self.rows.clone(),
        };
        ResultSet::new(self.columns.clone(), rows)
    }
}

/// In-memory store of all playground tables, in creation order.
#[derive(Clone, Debug, Default)]
pub struct TableStore {
    tables: Vec<Table>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Table names in creation order (drives the sidebar listing).
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    fn table_mut(&mut self, name: &str) -> DataResult<&mut Table> {
        self.tables
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or_else(|| DataError::UnknownTable(name.to_string()))
    }

    /// Create an empty table. Fails on a duplicate name or empty schema.
    pub fn create_table(&mut self, name: &str, columns: Vec<DataColumn>) -> DataResult<()> {
        if columns.is_empty() {
            return Err(DataError::NoColumns);
        }
        if self.table(name).is_some() {
            return Err(DataError::DuplicateTable(name.to_string()));
        }
        tracing::debug!(table = name, columns = columns.len(), "creating table");
        self.tables.push(Table::new(name, columns));
        Ok(())
    }

    /// Insert a table wholesale, replacing any existing table with the
    /// same name in place. This is the upload path's drop-and-recreate
    /// semantics; sidebar order is preserved on replacement.
    pub fn put_table(&mut self, table: Table) {
        tracing::debug!(table = %table.name, rows = table.rows.len(), "putting table");
        match self.tables.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }

    /// Parse CSV text and store it as a table (replacing a same-named
    /// table, as a re-upload does).
    pub fn create_table_from_csv(&mut self, name: &str, content: &str) -> DataResult<()> {
        let (columns, rows) = parse_csv(content)?;
        tracing::info!(table = name, rows = rows.len(), "creating table from CSV");
        self.put_table(Table {
            name: name.to_string(),
            columns,
            rows,
        });
        Ok(())
    }

    pub fn drop_table(&mut self, name: &str) -> DataResult<()> {
        let index = self
            .tables
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| DataError::UnknownTable(name.to_string()))?;
        tracing::debug!(table = name, "dropping table");
        self.tables.remove(index);
        Ok(())
    }

    /// Insert a row of user-entered values, each validated against its
    /// column's declared type. Any failure rejects the whole row.
    pub fn insert_row(&mut self, table: &str, values: &[&str]) -> DataResult<()> {
        let table = self.table_mut(table)?;
        if values.len() != table.columns.len() {
            return Err(DataError::RowArity {
                expected: table.columns.len(),
                got: values.len(),
            });
        }
        let cells = values
            .iter()
            .zip(&table.columns)
            .map(|(value, column)| DataCell::parse(value, column.data_type))
            .collect::<DataResult<Vec<_>>>()?;
        table.rows.push(DataRow::new(cells));
        Ok(())
    }

    /// Append a column, padding every existing row with `Null`.
    pub fn add_column(&mut self, table: &str, column: DataColumn) -> DataResult<()> {
        let table = self.table_mut(table)?;
        if table.columns.iter().any(|c| c.name == column.name) {
            return Err(DataError::InvalidData(format!(
                "column {:?} already exists",
                column.name
            )));
        }
        tracing::debug!(table = %table.name, column = %column.name, "adding column");
        table.columns.push(column);
        for row in &mut table.rows {
            row.cells.push(DataCell::Null);
        }
        Ok(())
    }

    /// Replace one cell with a boundary-validated value.
    pub fn update_cell(
        &mut self,
        table: &str,
        row: usize,
        col: usize,
        value: &str,
    ) -> DataResult<()> {
        let table = self.table_mut(table)?;
        let data_type = table
            .columns
            .get(col)
            .map(|c| c.data_type)
            .ok_or_else(|| DataError::InvalidData(format!("no column at index {col}")))?;
        let cell = DataCell::parse(value, data_type)?;
        let row = table
            .rows
            .get_mut(row)
            .ok_or_else(|| DataError::InvalidData(format!("no row at index {row}")))?;
        row.cells[col] = cell;
        Ok(())
    }

    /// The sidebar preview: the first few rows of a table.
    pub fn preview(&self, name: &str) -> DataResult<ResultSet> {
        self.table(name)
            .map(|t| t.to_result(Some(TABLE_PREVIEW_ROWS)))
            .ok_or_else(|| DataError::UnknownTable(name.to_string()))
    }

    /// The whole table as a result set.
    pub fn snapshot(&self, name: &str) -> DataResult<ResultSet> {
        self.table(name)
            .map(|t| t.to_result(None))
            .ok_or_else(|| DataError::UnknownTable(name.to_string()))
    }
}
