//! Header-row helpers: key-column resolution and column labels.
//!
//! The first row of a sheet is treated as its header row. Labels and key
//! positions always come from the sheet they describe, so two workbooks
//! with reordered columns still resolve the same logical key column.

use crate::addressing::column_letter;
use crate::config::ColumnSelector;
use crate::diff::ColumnInfo;
use crate::workbook::{cell_at, CellValue, Row};

/// Resolve a key-column selector against a sheet's header row.
///
/// Index selectors are taken as-is; out-of-range indices simply key no
/// rows. Header selectors require an exact, case-sensitive match and
/// return `None` when the sheet has no such header (or no rows at all).
pub(super) fn resolve_key_index(rows: &[Row], selector: &ColumnSelector) -> Option<usize> {
    match selector {
        ColumnSelector::Index(index) => Some(*index),
        ColumnSelector::Header(name) => {
            let header = rows.first()?;
            header
                .iter()
                .position(|cell| cell.as_ref().and_then(|v| v.as_text()) == Some(name.as_str()))
        }
    }
}

/// Column label used in differences: the first grid's header cell when it
/// is present and non-empty, otherwise the synthetic "Column <LETTER>"
/// form.
pub(super) fn column_label(rows: &[Row], col: usize) -> String {
    label_for(rows.first().and_then(|header| cell_at(header, col)), col)
}

/// Header entries for the report's column listing.
pub(super) fn extract_columns(rows: &[Row]) -> Vec<ColumnInfo> {
    let Some(header) = rows.first() else {
        return Vec::new();
    };
    header
        .iter()
        .enumerate()
        .map(|(index, cell)| ColumnInfo {
            name: label_for(cell.as_ref(), index),
            index,
        })
        .collect()
}

fn label_for(cell: Option<&CellValue>, col: usize) -> String {
    match cell {
        Some(CellValue::Text(s)) if s.is_empty() => synthetic_label(col),
        Some(value) => value.to_string(),
        None => synthetic_label(col),
    }
}

fn synthetic_label(col: usize) -> String {
    format!("Column {}", column_letter(col))
}
