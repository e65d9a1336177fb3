//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use workbook_diff::{
    compare, CellValue, ColumnSelector, ComparisonReport, MatchConfig, Row, Sheet, Workbook,
};

pub fn n(value: f64) -> Option<CellValue> {
    Some(CellValue::Number(value))
}

pub fn t(text: &str) -> Option<CellValue> {
    Some(CellValue::Text(text.into()))
}

pub fn b(value: bool) -> Option<CellValue> {
    Some(CellValue::Bool(value))
}

pub fn e() -> Option<CellValue> {
    None
}

pub fn sheet(name: &str, rows: Vec<Row>) -> Sheet {
    Sheet::new(name, rows)
}

pub fn workbook(name: &str, sheets: Vec<Sheet>) -> Workbook {
    Workbook::new(name, sheets)
}

/// A workbook with one sheet named "Sheet1", the shape CSV loads produce.
pub fn single_sheet(file: &str, rows: Vec<Row>) -> Workbook {
    workbook(file, vec![sheet("Sheet1", rows)])
}

pub fn compare_positional(a: &Workbook, b: &Workbook) -> ComparisonReport {
    compare(a, b, &MatchConfig::default()).expect("comparison should succeed")
}

pub fn compare_by_header(a: &Workbook, b: &Workbook, header: &str) -> ComparisonReport {
    let config = MatchConfig::keyed(ColumnSelector::Header(header.into()));
    compare(a, b, &config).expect("comparison should succeed")
}

pub fn compare_by_index(a: &Workbook, b: &Workbook, index: usize) -> ComparisonReport {
    let config = MatchConfig::keyed(ColumnSelector::Index(index));
    compare(a, b, &config).expect("comparison should succeed")
}
