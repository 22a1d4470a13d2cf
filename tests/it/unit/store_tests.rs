//! Table store workflows: uploads, edits, previews.

use queryboard::constants::TABLE_PREVIEW_ROWS;
use queryboard::{DataCell, DataColumn, DataError, DataType, TableStore};

const UPLOAD: &str = "\
city,population,founded
Springfield,30000,1821-05-01
Shelbyville,25000,1833-08-12
Ogdenville,12000,1890-01-30";

#[test]
fn csv_upload_creates_a_typed_table() {
    let mut store = TableStore::new();
    store.create_table_from_csv("cities", UPLOAD).unwrap();

    let table = store.table("cities").unwrap();
    assert_eq!(table.columns[0].data_type, DataType::Text);
    assert_eq!(table.columns[1].data_type, DataType::Integer);
    assert_eq!(table.columns[2].data_type, DataType::Date);
    assert_eq!(table.rows.len(), 3);
}

#[test]
fn reupload_replaces_the_table() {
    let mut store = TableStore::new();
    store.create_table_from_csv("cities", UPLOAD).unwrap();
    store
        .create_table_from_csv("cities", "city\nMonorail")
        .unwrap();

    let table = store.table("cities").unwrap();
    assert_eq!(table.columns.len(), 1);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn edits_are_validated_against_the_upload_schema() {
    let mut store = TableStore::new();
    store.create_table_from_csv("cities", UPLOAD).unwrap();

    // population is Integer after inference, so text is rejected
    let result = store.update_cell("cities", 0, 1, "lots");
    assert!(matches!(result, Err(DataError::InvalidCell { .. })));

    store.update_cell("cities", 0, 1, "31000").unwrap();
    assert_eq!(
        store.table("cities").unwrap().rows[0].cells[1],
        DataCell::Integer(31000)
    );
}

#[test]
fn grow_a_table_column_then_row() {
    let mut store = TableStore::new();
    store.create_table_from_csv("cities", UPLOAD).unwrap();

    store
        .add_column("cities", DataColumn::new("mayor", DataType::Text))
        .unwrap();
    store
        .insert_row("cities", &["North Haverbrook", "9000", "1902-03-04", "Lanley"])
        .unwrap();

    let table = store.table("cities").unwrap();
    assert_eq!(table.rows.len(), 4);
    // Pre-existing rows were padded with nulls for the new column
    assert_eq!(table.rows[0].cells[3], DataCell::Null);
    assert_eq!(table.rows[3].cells[3], DataCell::Text("Lanley".into()));
}

#[test]
fn preview_is_a_bounded_projection() {
    let mut store = TableStore::new();
    let mut csv = String::from("n\n");
    for i in 0..30 {
        csv.push_str(&format!("{i}\n"));
    }
    store.create_table_from_csv("numbers", &csv).unwrap();

    let preview = store.preview("numbers").unwrap();
    assert_eq!(preview.row_count(), TABLE_PREVIEW_ROWS);

    // The preview is a snapshot; mutating the store later cannot move it
    store.drop_table("numbers").unwrap();
    assert_eq!(preview.row_count(), TABLE_PREVIEW_ROWS);
}
