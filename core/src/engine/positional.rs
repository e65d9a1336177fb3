//! Positional comparison: row N against row N, cell by cell.

use crate::addressing::cell_reference;
use crate::diff::{sentinel, DiffError, Difference};
use crate::sink::DiffSink;
use crate::workbook::{cell_at, Row};

use super::context::emit;
use super::headers::column_label;
use super::values_differ;

/// Compare two grids strictly by position. Ragged and missing rows read as
/// empty beyond their length, so trailing blank regions never produce
/// differences on their own. Column labels come from the first grid's
/// header row.
pub(super) fn compare_positional<S: DiffSink>(
    sheet_name: &str,
    rows1: &[Row],
    rows2: &[Row],
    sink: &mut S,
    count: &mut usize,
) -> Result<(), DiffError> {
    let max_rows = rows1.len().max(rows2.len());
    for row_idx in 0..max_rows {
        let row1 = rows1.get(row_idx).map(Vec::as_slice).unwrap_or(&[]);
        let row2 = rows2.get(row_idx).map(Vec::as_slice).unwrap_or(&[]);
        let max_cols = row1.len().max(row2.len());
        for col in 0..max_cols {
            let value1 = cell_at(row1, col);
            let value2 = cell_at(row2, col);
            if values_differ(value1, value2) {
                let reference = cell_reference(row_idx, col);
                emit(
                    sink,
                    count,
                    Difference::cell_changed(
                        sheet_name,
                        sentinel::NOT_APPLICABLE,
                        column_label(rows1, col),
                        reference.clone(),
                        reference,
                        value1,
                        value2,
                    ),
                )?;
            }
        }
    }
    Ok(())
}
