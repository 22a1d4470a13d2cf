//! Sorter behavior over realistic result shapes.

use crate::helpers::{column_display, product_result};
use queryboard::{sort, SortDirection, SortSpec};

fn spec(key: &str, direction: SortDirection) -> SortSpec {
    SortSpec {
        key: Some(key.to_string()),
        direction,
    }
}

#[test]
fn qty_descending_orders_z_x_y() {
    let sorted = sort(&product_result(), &spec("qty", SortDirection::Descending));
    assert_eq!(column_display(&sorted, "product"), vec!["Z", "X", "Y"]);
    assert_eq!(column_display(&sorted, "qty"), vec!["8", "5", "3"]);
}

#[test]
fn sorting_twice_with_the_same_spec_is_identical() {
    let spec = spec("qty", SortDirection::Ascending);
    let once = sort(&product_result(), &spec);
    let twice = sort(&once, &spec);
    assert_eq!(once, twice);
}

#[test]
fn toggling_direction_twice_restores_equal_key_order() {
    // Both East rows share the region key; X precedes Y initially
    let input = product_result();
    let down = sort(&input, &spec("region", SortDirection::Descending));
    let up = sort(&down, &spec("region", SortDirection::Ascending));
    let restored = sort(&up, &spec("region", SortDirection::Descending));
    assert_eq!(column_display(&down, "product"), column_display(&restored, "product"));
}

#[test]
fn text_sort_is_case_sensitive() {
    use crate::helpers::{text, ResultSetBuilder};
    use queryboard::DataType;

    let input = ResultSetBuilder::new()
        .column("name", DataType::Text)
        .row(vec![text("apple")])
        .row(vec![text("Banana")])
        .build();

    let sorted = sort(&input, &spec("name", SortDirection::Ascending));
    // Uppercase sorts before lowercase in a case-sensitive comparison
    assert_eq!(column_display(&sorted, "name"), vec!["Banana", "apple"]);
}
