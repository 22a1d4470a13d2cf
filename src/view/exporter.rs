//! Export serializers for the visible page.
//!
//! Both exporters are pure: they take the page the user is looking at
//! and return text, leaving the destination (a download, the clipboard)
//! to the caller. Export deliberately reflects "what you see": the
//! current page, not the full result set.

use crate::data::DataResult;
use crate::types::{DataCell, DataColumn, DataRow};
use serde_json::Value;

/// Serialize a page as comma-separated text: a header row of column
/// names, then one line per row of display values. An empty page yields
/// a header-only string.
pub fn to_csv(columns: &[DataColumn], rows: &[DataRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    let header: Vec<String> = columns.iter().map(|c| quote_field(&c.name)).collect();
    lines.push(header.join(","));

    for row in rows {
        let cells: Vec<String> = (0..columns.len())
            .map(|i| quote_field(&row.cell(i).display()))
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// Serialize a page as a pretty-printed JSON array of row objects, keys
/// in column order, values keeping their native scalar type.
pub fn to_json(columns: &[DataColumn], rows: &[DataRow]) -> DataResult<String> {
    let objects: Vec<Value> = rows
        .iter()
        .map(|row| {
            let mut object = serde_json::Map::new();
            for (i, column) in columns.iter().enumerate() {
                object.insert(column.name.clone(), cell_to_json(row.cell(i)));
            }
            Value::Object(object)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&objects)?)
}

fn cell_to_json(cell: &DataCell) -> Value {
    match cell {
        DataCell::Integer(i) => Value::from(*i),
        DataCell::Decimal(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        DataCell::Text(s) => Value::String(s.clone()),
        DataCell::Boolean(b) => Value::Bool(*b),
        // JSON has no date type; dates export as their display string
        DataCell::Date(_) => Value::String(cell.display()),
        DataCell::Null => Value::Null,
    }
}

/// Quote a CSV field if necessary (contains a comma, quote, or newline),
/// doubling any inner quotes.
fn quote_field(value: &str) -> String {
    let needs_quoting = value.contains(',')
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');

    if needs_quoting {
        let escaped = value.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        value.to_string()
    }
}
