//! Export serialization, including the round-trip property.

use crate::helpers::{dec, int, text, ResultSetBuilder};
use queryboard::data::parse_csv;
use queryboard::view::{to_csv, to_json};
use queryboard::{DataCell, DataType};

#[test]
fn csv_round_trips_through_a_quote_aware_reader() {
    let result = ResultSetBuilder::new()
        .column("company", DataType::Text)
        .column("motto", DataType::Text)
        .column("employees", DataType::Integer)
        .row(vec![text("Acme, Inc."), text("say \"hi\""), int(40)])
        .row(vec![text("Plain Co"), DataCell::Null, int(7)])
        .build();

    let csv = to_csv(&result.columns, &result.rows);
    let (columns, rows) = parse_csv(&csv).expect("exported CSV parses");

    assert_eq!(
        columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["company", "motto", "employees"]
    );
    assert_eq!(rows.len(), 2);
    // Values survive as their display strings, commas and quotes intact
    assert_eq!(rows[0].cell(0).display(), "Acme, Inc.");
    assert_eq!(rows[0].cell(1).display(), "say \"hi\"");
    assert_eq!(rows[0].cell(2).display(), "40");
    assert_eq!(rows[1].cell(1), &DataCell::Null);
}

#[test]
fn csv_export_snapshot() {
    let result = ResultSetBuilder::new()
        .column("city", DataType::Text)
        .column("sales", DataType::Decimal)
        .row(vec![text("A"), dec(10.5)])
        .row(vec![text("B"), dec(20.0)])
        .build();

    let csv = to_csv(&result.columns, &result.rows);
    insta::assert_snapshot!(csv, @r#"
    city,sales
    A,10.5
    B,20
    "#);
}

#[test]
fn json_export_is_two_space_pretty_printed() {
    let result = ResultSetBuilder::new()
        .column("n", DataType::Integer)
        .row(vec![int(1)])
        .build();

    let json = to_json(&result.columns, &result.rows).unwrap();
    assert_eq!(json, "[\n  {\n    \"n\": 1\n  }\n]");
}
