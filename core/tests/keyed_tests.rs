mod common;

use common::{compare_by_header, compare_by_index, compare_positional, e, n, single_sheet, t};
use pretty_assertions::assert_eq;
use workbook_diff::{sentinel, CellValue, DiffValue, Difference};

#[test]
fn reordered_rows_match_by_key() {
    let old = single_sheet(
        "old.csv",
        vec![
            vec![t("ID"), t("Name")],
            vec![n(1.0), t("Alice")],
            vec![n(2.0), t("Bob")],
        ],
    );
    let new = single_sheet(
        "new.csv",
        vec![
            vec![t("ID"), t("Name")],
            vec![n(2.0), t("Bob")],
            vec![n(1.0), t("Alicia")],
            vec![n(3.0), t("Carol")],
        ],
    );
    let report = compare_by_header(&old, &new, "ID");

    assert_eq!(
        report.differences,
        vec![
            Difference::cell_changed(
                "Sheet1",
                "1",
                "Name",
                "B2",
                "B3",
                Some(&CellValue::Text("Alice".into())),
                Some(&CellValue::Text("Alicia".into())),
            ),
            Difference::row_only_in_second("Sheet1", "3", 3),
        ]
    );
    assert!(report.warnings.is_empty());
}

#[test]
fn removed_row_reported_before_added_row() {
    let old = single_sheet(
        "old.csv",
        vec![
            vec![t("ID")],
            vec![t("gone")],
            vec![t("stays")],
        ],
    );
    let new = single_sheet(
        "new.csv",
        vec![
            vec![t("ID")],
            vec![t("added")],
            vec![t("stays")],
        ],
    );
    let report = compare_by_header(&old, &new, "ID");

    assert_eq!(
        report.differences,
        vec![
            Difference::row_only_in_first("Sheet1", "gone", 1),
            Difference::row_only_in_second("Sheet1", "added", 1),
        ]
    );
    assert_eq!(report.differences[0].cell1, "Row 2");
    assert_eq!(report.differences[0].cell2, sentinel::NOT_APPLICABLE);
    assert_eq!(
        report.differences[0].value1,
        DiffValue::Note(sentinel::ROW_EXISTS.to_string())
    );
}

#[test]
fn row_location_reflects_each_side() {
    let old = single_sheet(
        "old.csv",
        vec![
            vec![t("ID"), t("Val")],
            vec![t("a"), n(1.0)],
            vec![t("b"), n(2.0)],
        ],
    );
    let new = single_sheet(
        "new.csv",
        vec![
            vec![t("ID"), t("Val")],
            vec![t("b"), n(2.0)],
            vec![t("a"), n(9.0)],
        ],
    );
    let report = compare_by_header(&old, &new, "Val");

    // Keyed on "Val": key 1.0 exists only in file 1, key 9.0 only in file 2.
    let only_first = report
        .differences
        .iter()
        .find(|d| d.key_value == "1")
        .expect("key 1 should be first-only");
    assert_eq!(only_first.column, sentinel::ENTIRE_ROW_COLUMN);
    assert_eq!(only_first.cell1, "Row 2");

    let only_second = report
        .differences
        .iter()
        .find(|d| d.key_value == "9")
        .expect("key 9 should be second-only");
    assert_eq!(only_second.cell2, "Row 3");
    assert_eq!(only_second.cell1, sentinel::NOT_APPLICABLE);
}

#[test]
fn key_column_position_can_differ_between_files() {
    let old = single_sheet(
        "old.csv",
        vec![
            vec![t("ID"), t("Name")],
            vec![n(1.0), t("Alice")],
        ],
    );
    let new = single_sheet(
        "new.csv",
        vec![
            vec![t("Name"), t("ID")],
            vec![t("Alice"), n(1.0)],
        ],
    );
    let report = compare_by_header(&old, &new, "ID");

    // Rows match by key; the only differences are the swapped columns.
    assert!(report.warnings.is_empty());
    assert!(report.differences.iter().all(|d| d.is_cell_change()));
    assert!(report.differences.iter().all(|d| d.key_value == "1"));
}

#[test]
fn missing_key_column_falls_back_to_positional() {
    let old = single_sheet(
        "old.csv",
        vec![vec![t("ID"), t("Val")], vec![n(1.0), n(10.0)]],
    );
    let new = single_sheet(
        "new.csv",
        vec![vec![t("ID"), t("Val")], vec![n(1.0), n(20.0)]],
    );
    let keyed = compare_by_header(&old, &new, "Missing");
    let positional = compare_positional(&old, &new);

    assert_eq!(keyed.differences, positional.differences);
    assert_eq!(
        keyed.warnings,
        vec![
            "Key column \"Missing\" not found in one or both files for sheet \"Sheet1\". \
             Using direct comparison instead."
                .to_string()
        ]
    );
}

#[test]
fn out_of_range_key_index_keys_no_rows() {
    let old = single_sheet(
        "old.csv",
        vec![vec![t("ID"), t("Val")], vec![n(1.0), n(10.0)]],
    );
    let new = single_sheet(
        "new.csv",
        vec![vec![t("ID"), t("Val")], vec![n(1.0), n(20.0)]],
    );
    let report = compare_by_index(&old, &new, 9);

    // The index resolves on both sides, so there is no fallback; every data
    // row lacks a key cell and is skipped.
    assert!(report.differences.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn empty_sheet_skips_key_matching_silently() {
    let old = single_sheet("old.csv", vec![vec![t("ID")], vec![n(1.0)]]);
    let new = single_sheet("new.csv", vec![]);
    let report = compare_by_header(&old, &new, "ID");

    assert!(report.warnings.is_empty());
    assert_eq!(report.differences.len(), 2);
    assert!(report.differences.iter().all(|d| d.is_cell_change()));
    assert!(report
        .differences
        .iter()
        .all(|d| d.key_value == sentinel::NOT_APPLICABLE));
}

#[test]
fn duplicate_keys_keep_the_last_row() {
    let old = single_sheet(
        "old.csv",
        vec![
            vec![t("ID"), t("Val")],
            vec![t("k"), n(1.0)],
            vec![t("k"), n(2.0)],
        ],
    );
    let new = single_sheet(
        "new.csv",
        vec![vec![t("ID"), t("Val")], vec![t("k"), n(3.0)]],
    );
    let report = compare_by_header(&old, &new, "ID");

    assert_eq!(
        report.differences,
        vec![Difference::cell_changed(
            "Sheet1",
            "k",
            "Val",
            "B3",
            "B2",
            Some(&CellValue::Number(2.0)),
            Some(&CellValue::Number(3.0)),
        )]
    );
}

#[test]
fn rows_without_a_key_cell_are_skipped() {
    let old = single_sheet(
        "old.csv",
        vec![
            vec![t("ID"), t("Val")],
            vec![e(), n(99.0)],
            vec![t("k"), n(1.0)],
        ],
    );
    let new = single_sheet(
        "new.csv",
        vec![vec![t("ID"), t("Val")], vec![t("k"), n(1.0)]],
    );
    let report = compare_by_header(&old, &new, "ID");

    assert!(report.differences.is_empty());
}

#[test]
fn empty_string_is_a_valid_key() {
    let old = single_sheet(
        "old.csv",
        vec![vec![t("ID"), t("Val")], vec![t(""), n(1.0)]],
    );
    let new = single_sheet(
        "new.csv",
        vec![vec![t("ID"), t("Val")], vec![t(""), n(2.0)]],
    );
    let report = compare_by_header(&old, &new, "ID");

    assert_eq!(report.differences.len(), 1);
    assert_eq!(report.differences[0].key_value, "");
    assert_eq!(report.differences[0].column, "Val");
}

#[test]
fn numeric_and_text_keys_compare_as_strings() {
    let old = single_sheet(
        "old.csv",
        vec![vec![t("ID"), t("Val")], vec![n(1.0), n(10.0)]],
    );
    let new = single_sheet(
        "new.csv",
        vec![vec![t("ID"), t("Val")], vec![t("1"), n(10.0)]],
    );
    let report = compare_by_header(&old, &new, "ID");

    // The rows pair up on the coerced key, then the key cell itself differs
    // because a number and a text cell are never equal.
    assert_eq!(report.differences.len(), 1);
    assert_eq!(report.differences[0].key_value, "1");
    assert_eq!(report.differences[0].column, "ID");
}

#[test]
fn large_integer_keys_render_without_exponent() {
    let old = single_sheet(
        "old.csv",
        vec![
            vec![t("ID"), t("Val")],
            vec![n(1234567890123.0), n(1.0)],
        ],
    );
    let new = single_sheet(
        "new.csv",
        vec![
            vec![t("ID"), t("Val")],
            vec![n(1234567890123.0), n(2.0)],
        ],
    );
    let report = compare_by_header(&old, &new, "ID");

    assert_eq!(report.differences.len(), 1);
    assert_eq!(report.differences[0].key_value, "1234567890123");
}

#[test]
fn common_keys_follow_first_file_row_order() {
    let old = single_sheet(
        "old.csv",
        vec![
            vec![t("ID"), t("Val")],
            vec![t("x"), n(1.0)],
            vec![t("y"), n(2.0)],
        ],
    );
    let new = single_sheet(
        "new.csv",
        vec![
            vec![t("ID"), t("Val")],
            vec![t("y"), n(20.0)],
            vec![t("x"), n(10.0)],
        ],
    );
    let report = compare_by_header(&old, &new, "ID");

    let keys: Vec<&str> = report
        .differences
        .iter()
        .map(|d| d.key_value.as_str())
        .collect();
    assert_eq!(keys, vec!["x", "y"]);
}
