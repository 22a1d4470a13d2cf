//! Paginator slicing and totals.

use crate::helpers::numbered_result;
use queryboard::{paginate, PageSpec};

#[test]
fn concatenated_pages_reproduce_the_result() {
    for page_size in [1, 3, 7, 10, 25] {
        let result = numbered_result(23);
        let first = paginate(&result, &PageSpec { page: 1, page_size });

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            seen.extend(paginate(&result, &PageSpec { page, page_size }).rows);
        }

        assert_eq!(seen, result.rows, "page_size {page_size}");
    }
}

#[test]
fn boundary_cases() {
    let empty = numbered_result(0);
    let page = paginate(&empty, &PageSpec { page: 1, page_size: 10 });
    assert_eq!((page.total_rows, page.total_pages), (0, 0));
    assert!(page.rows.is_empty());

    let exact = numbered_result(10);
    let page = paginate(&exact, &PageSpec { page: 1, page_size: 10 });
    assert_eq!(page.total_pages, 1);
}

#[test]
fn slice_bounds_are_half_open() {
    let result = numbered_result(5);
    let page = paginate(&result, &PageSpec { page: 2, page_size: 2 });
    let values: Vec<String> = page.rows.iter().map(|r| r.cell(0).display()).collect();
    assert_eq!(values, vec!["2", "3"]);
}
