//! CSV and TSV parsing
//!
//! Parses uploaded CSV/TSV text into typed columns and rows with
//! automatic type inference.
//!
//! ## Memory Limits
//!
//! Input with more than [`MAX_CSV_ROWS`](crate::constants::MAX_CSV_ROWS)
//! rows is rejected up front to prevent unbounded memory growth.

use crate::constants::{MAX_CSV_ROWS, TYPE_INFERENCE_SAMPLE};
use crate::data::error::{DataError, DataResult};
use crate::types::{DataCell, DataColumn, DataRow, DataType};

/// Parse CSV/TSV content into a typed column list and rows.
///
/// The delimiter is detected from the content (whichever of comma, tab,
/// or semicolon appears most in the first lines). Column types are
/// inferred from a bounded sample, then every value is parsed against
/// the inferred type. A value that contradicts its column's type is an
/// error rather than a silent fallback.
pub fn parse_csv(content: &str) -> DataResult<(Vec<DataColumn>, Vec<DataRow>)> {
    let delimiter = detect_delimiter(content);
    parse_csv_with_delimiter(content, delimiter)
}

/// Parse CSV content with an explicit delimiter.
pub fn parse_csv_with_delimiter(
    content: &str,
    delimiter: char,
) -> DataResult<(Vec<DataColumn>, Vec<DataRow>)> {
    let mut lines = content.lines();

    let header_line = lines.next().ok_or(DataError::EmptyInput)?;
    let headers = split_line(header_line, delimiter);
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(DataError::NoColumns);
    }

    // Collect raw fields first; types are inferred before cells are built
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        if raw_rows.len() >= MAX_CSV_ROWS {
            return Err(DataError::TooManyRows {
                rows: raw_rows.len() + 1,
                max_rows: MAX_CSV_ROWS,
            });
        }
        raw_rows.push(split_line(line, delimiter));
    }

    let columns: Vec<DataColumn> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| DataColumn::new(name, infer_column_type(&raw_rows, i)))
        .collect();

    let mut rows = Vec::with_capacity(raw_rows.len());
    for raw in &raw_rows {
        let mut cells = Vec::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            // Short rows pad with nulls
            let cell = match raw.get(i) {
                Some(value) => DataCell::parse(value, column.data_type)?,
                None => DataCell::Null,
            };
            cells.push(cell);
        }
        rows.push(DataRow::new(cells));
    }

    tracing::debug!(
        columns = columns.len(),
        rows = rows.len(),
        %delimiter,
        "parsed CSV content"
    );

    Ok((columns, rows))
}

/// Detect the delimiter by counting candidates over the first few lines.
fn detect_delimiter(content: &str) -> char {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let semicolon_count = first_lines.matches(';').count();

    if tab_count > comma_count && tab_count > semicolon_count {
        '\t'
    } else if semicolon_count > comma_count {
        ';'
    } else {
        ','
    }
}

/// Split one line into fields, respecting quoted sections and doubled
/// quote escapes.
fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                field.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(field.trim().to_string());
            field.clear();
        } else {
            field.push(c);
        }
    }
    fields.push(field.trim().to_string());

    fields
}

/// Infer the data type for a column by sampling values.
///
/// Precedence: integer, decimal, boolean, date, text. Empty values do
/// not vote.
fn infer_column_type(rows: &[Vec<String>], col_idx: usize) -> DataType {
    let sample: Vec<&str> = rows
        .iter()
        .take(TYPE_INFERENCE_SAMPLE)
        .filter_map(|r| r.get(col_idx).map(String::as_str))
        .filter(|s| !s.is_empty())
        .collect();

    if sample.is_empty() {
        return DataType::Text;
    }

    if sample.iter().all(|s| s.parse::<i64>().is_ok()) {
        return DataType::Integer;
    }

    if sample
        .iter()
        .all(|s| s.parse::<f64>().map(|n| n.is_finite()).unwrap_or(false))
    {
        return DataType::Decimal;
    }

    if sample.iter().all(|s| {
        matches!(
            s.to_lowercase().as_str(),
            "true" | "false" | "yes" | "no" | "y" | "n"
        )
    }) {
        return DataType::Boolean;
    }

    if sample
        .iter()
        .all(|s| DataCell::parse(s, DataType::Date).is_ok())
    {
        return DataType::Date;
    }

    DataType::Text
}
