//! Page slicing over a sorted result.

use crate::types::{DataRow, PageSpec, ResultSet};

/// One visible page plus the totals the pager widget needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub rows: Vec<DataRow>,
    pub total_rows: usize,
    pub total_pages: usize,
}

/// Total page count for a row count: `ceil(rows / size)`, zero for an
/// empty result.
pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total_rows.div_ceil(size)
}

/// Slice the page `[(page-1)*size, page*size)` out of an already-sorted
/// result.
///
/// Pure: an out-of-range page yields an empty slice rather than being
/// clamped here. Keeping the index inside `[1, max(1, total_pages)]` is
/// the caller's job (see `ResultSession::set_page`).
pub fn paginate(result: &ResultSet, spec: &PageSpec) -> Page {
    let size = spec.page_size.max(1);
    let page = spec.page.max(1);
    let total_rows = result.row_count();

    let start = (page - 1).saturating_mul(size).min(total_rows);
    let end = start.saturating_add(size).min(total_rows);

    Page {
        rows: result.rows[start..end].to_vec(),
        total_rows,
        total_pages: total_pages(total_rows, size),
    }
}
