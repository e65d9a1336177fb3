//! Differences and reports for workbook comparison.
//!
//! This module defines the types used to represent comparison results:
//! - [`Difference`]: a single discrepancy (cell change, row or sheet presence)
//! - [`ComparisonReport`]: all differences from one comparison plus metadata
//! - [`CompareSummary`]: summary metadata for streaming callers
//! - [`DiffError`]: errors that can occur while comparing
//!
//! Every difference carries the same seven fields regardless of kind;
//! structural differences fill the unused fields with the sentinels in
//! [`sentinel`], which keeps serialized reports a flat homogeneous list.

use crate::workbook::CellValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed strings that mark structural differences inside the flat
/// [`Difference`] record.
pub mod sentinel {
    /// Placeholder for fields that do not apply (positional key values,
    /// cell references of sheet-level differences).
    pub const NOT_APPLICABLE: &str = "N/A";
    /// Column label carried by sheet presence differences.
    pub const SHEET_COLUMN: &str = "Sheet";
    /// Column label carried by row presence differences.
    pub const ENTIRE_ROW_COLUMN: &str = "Entire Row";
    pub const SHEET_EXISTS: &str = "Sheet exists";
    pub const SHEET_MISSING: &str = "Sheet missing";
    pub const ROW_EXISTS: &str = "Row exists";
    pub const ROW_MISSING: &str = "Row missing";
}

/// A compared value as it appears in a report: the empty cell, a raw cell
/// value, or a structural note such as "Row exists".
///
/// Serialization is untagged, so cell values surface as raw JSON scalars
/// and the empty cell as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiffValue {
    Empty,
    Cell(CellValue),
    Note(String),
}

impl DiffValue {
    pub fn from_cell(value: Option<&CellValue>) -> DiffValue {
        match value {
            Some(v) => DiffValue::Cell(v.clone()),
            None => DiffValue::Empty,
        }
    }

    fn note(text: &str) -> DiffValue {
        DiffValue::Note(text.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DiffValue::Empty)
    }
}

/// One reported discrepancy between the two workbooks.
///
/// `cell1`/`value1` describe the first workbook's side and `cell2`/`value2`
/// the second's. For keyed cell changes the two references may name
/// different rows; for positional changes they are identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Difference {
    pub sheet: String,
    /// The matched key for keyed differences, or "N/A".
    pub key_value: String,
    /// Header label of the changed column, "Sheet", or "Entire Row".
    pub column: String,
    pub cell1: String,
    pub cell2: String,
    pub value1: DiffValue,
    pub value2: DiffValue,
}

impl Difference {
    #[allow(clippy::too_many_arguments)]
    pub fn cell_changed(
        sheet: impl Into<String>,
        key_value: impl Into<String>,
        column: impl Into<String>,
        cell1: impl Into<String>,
        cell2: impl Into<String>,
        value1: Option<&CellValue>,
        value2: Option<&CellValue>,
    ) -> Difference {
        Difference {
            sheet: sheet.into(),
            key_value: key_value.into(),
            column: column.into(),
            cell1: cell1.into(),
            cell2: cell2.into(),
            value1: DiffValue::from_cell(value1),
            value2: DiffValue::from_cell(value2),
        }
    }

    /// A keyed row present only in the first workbook. `row_idx` is the
    /// zero-based index of the row in that workbook's sheet.
    pub fn row_only_in_first(
        sheet: impl Into<String>,
        key_value: impl Into<String>,
        row_idx: usize,
    ) -> Difference {
        Difference {
            sheet: sheet.into(),
            key_value: key_value.into(),
            column: sentinel::ENTIRE_ROW_COLUMN.to_string(),
            cell1: format!("Row {}", row_idx + 1),
            cell2: sentinel::NOT_APPLICABLE.to_string(),
            value1: DiffValue::note(sentinel::ROW_EXISTS),
            value2: DiffValue::note(sentinel::ROW_MISSING),
        }
    }

    /// A keyed row present only in the second workbook.
    pub fn row_only_in_second(
        sheet: impl Into<String>,
        key_value: impl Into<String>,
        row_idx: usize,
    ) -> Difference {
        Difference {
            sheet: sheet.into(),
            key_value: key_value.into(),
            column: sentinel::ENTIRE_ROW_COLUMN.to_string(),
            cell1: sentinel::NOT_APPLICABLE.to_string(),
            cell2: format!("Row {}", row_idx + 1),
            value1: DiffValue::note(sentinel::ROW_MISSING),
            value2: DiffValue::note(sentinel::ROW_EXISTS),
        }
    }

    pub fn sheet_only_in_first(sheet: impl Into<String>) -> Difference {
        Difference {
            sheet: sheet.into(),
            key_value: sentinel::NOT_APPLICABLE.to_string(),
            column: sentinel::SHEET_COLUMN.to_string(),
            cell1: sentinel::NOT_APPLICABLE.to_string(),
            cell2: sentinel::NOT_APPLICABLE.to_string(),
            value1: DiffValue::note(sentinel::SHEET_EXISTS),
            value2: DiffValue::note(sentinel::SHEET_MISSING),
        }
    }

    pub fn sheet_only_in_second(sheet: impl Into<String>) -> Difference {
        Difference {
            sheet: sheet.into(),
            key_value: sentinel::NOT_APPLICABLE.to_string(),
            column: sentinel::SHEET_COLUMN.to_string(),
            cell1: sentinel::NOT_APPLICABLE.to_string(),
            cell2: sentinel::NOT_APPLICABLE.to_string(),
            value1: DiffValue::note(sentinel::SHEET_MISSING),
            value2: DiffValue::note(sentinel::SHEET_EXISTS),
        }
    }

    /// Whether this difference reports a sheet present on only one side.
    pub fn is_sheet_presence(&self) -> bool {
        self.column == sentinel::SHEET_COLUMN
    }

    /// Whether this difference reports a keyed row present on only one side.
    pub fn is_row_presence(&self) -> bool {
        self.column == sentinel::ENTIRE_ROW_COLUMN
    }

    /// Whether this difference reports a changed cell value.
    pub fn is_cell_change(&self) -> bool {
        !self.is_sheet_presence() && !self.is_row_presence()
    }
}

/// One header-row entry of the first common sheet, for callers that want to
/// offer a key-column picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Zero-based column index.
    pub index: usize,
}

/// Summary metadata about a comparison emitted alongside streamed
/// differences.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareSummary {
    /// Total number of differences emitted.
    pub difference_count: usize,
    /// Non-fatal notes, e.g. key-column fallbacks.
    pub warnings: Vec<String>,
    /// Header columns of the first common sheet; `None` when the workbooks
    /// share no sheet.
    pub columns: Option<Vec<ColumnInfo>>,
}

/// The complete result of comparing two workbooks.
///
/// # Warnings
///
/// A comparison can succeed while still downgrading behavior, e.g. falling
/// back to positional matching on a sheet where the key column is missing.
/// Those conditions are reported here; the CLI prints them to stderr as
/// `Warning: ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub differences: Vec<Difference>,
    /// Display name of the first workbook, typically its file name.
    pub file1_name: String,
    pub file2_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnInfo>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ComparisonReport {
    pub fn from_differences_and_summary(
        differences: Vec<Difference>,
        summary: CompareSummary,
        file1_name: impl Into<String>,
        file2_name: impl Into<String>,
    ) -> ComparisonReport {
        ComparisonReport {
            differences,
            file1_name: file1_name.into(),
            file2_name: file2_name.into(),
            columns: summary.columns,
            warnings: summary.warnings,
        }
    }

    pub fn has_differences(&self) -> bool {
        !self.differences.is_empty()
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Errors produced by comparison APIs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DiffError {
    #[error("[WBDIFF_DIFF_001] sink error: {message}. Suggestion: check the output destination and retry.")]
    SinkError { message: String },

    #[error("[WBDIFF_DIFF_002] sheet '{requested}' not found in {workbook}. Available sheets: {}. Suggestion: check the sheet name and casing.", available.join(", "))]
    SheetNotFound {
        requested: String,
        /// Display name of the workbook missing the sheet.
        workbook: String,
        available: Vec<String>,
    },
}

impl DiffError {
    pub fn code(&self) -> &'static str {
        match self {
            DiffError::SinkError { .. } => "WBDIFF_DIFF_001",
            DiffError::SheetNotFound { .. } => "WBDIFF_DIFF_002",
        }
    }
}
