//! Type-aware stable sorting over a result snapshot.

use crate::types::{DataCell, ResultSet, SortDirection, SortSpec};
use std::cmp::Ordering;

/// Sort a result by the spec's column, returning a new result set.
///
/// With no key (or a key naming no column) the input order is kept.
/// Values that both read as numbers compare numerically; everything else
/// compares by display string, case-sensitively, with nulls as the empty
/// string. The sort is stable: ties keep their original relative order.
pub fn sort(result: &ResultSet, spec: &SortSpec) -> ResultSet {
    let col = match spec.key.as_deref().and_then(|k| result.column_index(k)) {
        Some(col) => col,
        None => return result.clone(),
    };

    let mut rows = result.rows.clone();
    rows.sort_by(|a, b| {
        let ordering = compare_cells(a.cell(col), b.cell(col));
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    ResultSet::new(result.columns.clone(), rows)
}

/// Compare two cells: numerically when both have a numeric view,
/// lexicographically on display strings otherwise. Incomparable floats
/// degrade to equal rather than failing.
fn compare_cells(a: &DataCell, b: &DataCell) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(na), Some(nb)) => na.partial_cmp(&nb).unwrap_or(Ordering::Equal),
        _ => a.display().cmp(&b.display()),
    }
}
