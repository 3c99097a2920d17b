//! Workbook output on disk.

use std::fs;

use audit_export::{Cell, ExportTable, write_xlsx};
use tempfile::TempDir;

#[test]
fn writes_workbook_to_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken_links.xlsx");

    let mut table = ExportTable::new(["URL", "Issue Type", "Issue"]);
    table.push_row(vec![
        Cell::from("https://a.test/"),
        Cell::from("Error"),
        Cell::from("Broken Links"),
    ]);
    write_xlsx(&table, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn empty_table_still_has_a_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.xlsx");

    let table = ExportTable::new(["Issue", "Affected URLs"]);
    assert!(table.is_empty());
    write_xlsx(&table, &path).unwrap();
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn invalid_sheet_name_is_an_error() {
    let dir = TempDir::new().unwrap();
    let table = ExportTable::new(["URL"]).with_sheet_name("bad/name");
    assert!(write_xlsx(&table, &dir.path().join("x.xlsx")).is_err());
}
