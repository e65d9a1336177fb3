//! Key-based comparison: rows matched by the stringified value of a key
//! column instead of by position.

use rustc_hash::FxHashMap;

use crate::addressing::cell_reference;
use crate::diff::{DiffError, Difference};
use crate::sink::DiffSink;
use crate::workbook::{cell_at, Row};

use super::context::emit;
use super::headers::column_label;
use super::values_differ;

/// Data rows of one sheet indexed by key value.
///
/// Row 0 is the header row and never keyed. Rows whose key cell is empty
/// are skipped entirely. A later row with a duplicate key replaces the
/// earlier row's data while the key keeps its first-seen position in the
/// iteration order.
pub(super) struct KeyedRows<'a> {
    ordered_keys: Vec<String>,
    by_key: FxHashMap<String, (&'a Row, usize)>,
}

impl<'a> KeyedRows<'a> {
    pub(super) fn build(rows: &'a [Row], key_col: usize) -> KeyedRows<'a> {
        let mut ordered_keys = Vec::new();
        let mut by_key: FxHashMap<String, (&'a Row, usize)> = FxHashMap::default();
        for (idx, row) in rows.iter().enumerate().skip(1) {
            let Some(value) = cell_at(row, key_col) else {
                continue;
            };
            let key = value.to_string();
            if by_key.insert(key.clone(), (row, idx)).is_none() {
                ordered_keys.push(key);
            }
        }
        KeyedRows {
            ordered_keys,
            by_key,
        }
    }

    /// Keyed rows in first-seen key order.
    pub(super) fn entries(&self) -> impl Iterator<Item = (&String, &'a Row, usize)> + '_ {
        self.ordered_keys
            .iter()
            .filter_map(move |key| self.by_key.get(key).map(|&(row, idx)| (key, row, idx)))
    }

    pub(super) fn get(&self, key: &str) -> Option<(&'a Row, usize)> {
        self.by_key.get(key).copied()
    }

    pub(super) fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }
}

/// Compare two grids by key: matched rows cell by cell, then rows present
/// on only one side, in that order. Each side's cell reference uses its own
/// row position, so a row that moved still reports where it actually lives.
pub(super) fn compare_keyed<S: DiffSink>(
    sheet_name: &str,
    rows1: &[Row],
    rows2: &[Row],
    key_col1: usize,
    key_col2: usize,
    sink: &mut S,
    count: &mut usize,
) -> Result<(), DiffError> {
    let keyed1 = KeyedRows::build(rows1, key_col1);
    let keyed2 = KeyedRows::build(rows2, key_col2);

    for (key, row1, idx1) in keyed1.entries() {
        let Some((row2, idx2)) = keyed2.get(key) else {
            continue;
        };
        let max_cols = row1.len().max(row2.len());
        for col in 0..max_cols {
            let value1 = cell_at(row1, col);
            let value2 = cell_at(row2, col);
            if values_differ(value1, value2) {
                emit(
                    sink,
                    count,
                    Difference::cell_changed(
                        sheet_name,
                        key.clone(),
                        column_label(rows1, col),
                        cell_reference(idx1, col),
                        cell_reference(idx2, col),
                        value1,
                        value2,
                    ),
                )?;
            }
        }
    }

    for (key, _, idx1) in keyed1.entries() {
        if keyed2.contains(key) {
            continue;
        }
        emit(
            sink,
            count,
            Difference::row_only_in_first(sheet_name, key.clone(), idx1),
        )?;
    }

    for (key, _, idx2) in keyed2.entries() {
        if keyed1.contains(key) {
            continue;
        }
        emit(
            sink,
            count,
            Difference::row_only_in_second(sheet_name, key.clone(), idx2),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::CellValue;

    fn n(value: f64) -> Option<CellValue> {
        Some(CellValue::Number(value))
    }

    fn t(text: &str) -> Option<CellValue> {
        Some(CellValue::Text(text.into()))
    }

    #[test]
    fn build_skips_header_and_empty_keys() {
        let rows: Vec<Row> = vec![
            vec![t("ID"), t("Name")],
            vec![n(1.0), t("a")],
            vec![None, t("ghost")],
            vec![n(2.0), t("b")],
        ];
        let keyed = KeyedRows::build(&rows, 0);
        let keys: Vec<&String> = keyed.entries().map(|(k, _, _)| k).collect();
        assert_eq!(keys, vec!["1", "2"]);
        assert!(!keyed.contains("ID"), "header row is never keyed");
    }

    #[test]
    fn duplicate_keys_keep_last_row_and_first_position() {
        let rows: Vec<Row> = vec![
            vec![t("ID"), t("Name")],
            vec![n(1.0), t("first")],
            vec![n(2.0), t("other")],
            vec![n(1.0), t("second")],
        ];
        let keyed = KeyedRows::build(&rows, 0);
        let entries: Vec<(&String, usize)> = keyed.entries().map(|(k, _, i)| (k, i)).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(*entries[0].0, "1");
        assert_eq!(entries[0].1, 3, "data comes from the later duplicate");
        assert_eq!(*entries[1].0, "2");
    }

    #[test]
    fn numeric_and_text_keys_coerce_to_the_same_string() {
        let rows1: Vec<Row> = vec![vec![t("ID")], vec![n(1.0)]];
        let rows2: Vec<Row> = vec![vec![t("ID")], vec![t("1")]];
        let keyed1 = KeyedRows::build(&rows1, 0);
        let keyed2 = KeyedRows::build(&rows2, 0);
        assert!(keyed2.contains(keyed1.entries().next().unwrap().0));
    }

    #[test]
    fn empty_string_is_a_valid_key() {
        let rows: Vec<Row> = vec![vec![t("ID")], vec![t("")]];
        let keyed = KeyedRows::build(&rows, 0);
        assert!(keyed.contains(""));
    }
}
