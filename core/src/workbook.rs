//! Workbook, sheet, and row data structures.
//!
//! This module defines the tabular model the comparison engine operates on:
//! - [`Workbook`]: a named, ordered collection of sheets
//! - [`Sheet`]: a named sheet holding an ordered sequence of rows
//! - [`Row`]: an ordered sequence of cells; rows may be ragged
//! - [`CellValue`]: a typed cell value; the empty cell is `None`
//!
//! The model is produced once per comparison by a loader (or by hand in
//! tests) and is never mutated by the engine.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed, non-empty cell value.
///
/// Empty cells are represented as `Option<CellValue>::None`, so absent
/// trailing cells and explicitly blank cells compare as the same thing.
/// Serialization is untagged: reports carry raw JSON scalars
/// (`10`, `"text"`, `true`) rather than variant wrappers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    // Tried before Text so ISO strings deserialize back into dates.
    DateTime(NaiveDateTime),
    Text(String),
}

/// One sheet row. Rows from the same sheet may have different lengths;
/// reading past the end of a row yields the empty cell.
pub type Row = Vec<Option<CellValue>>;

/// Cell lookup that treats out-of-range positions as empty.
pub fn cell_at(row: &[Option<CellValue>], col: usize) -> Option<&CellValue> {
    row.get(col).and_then(|cell| cell.as_ref())
}

/// A single named sheet within a workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// The display name of the sheet (e.g., "Sheet1", "Data").
    pub name: String,
    /// Row data, in sheet order. The first row is conventionally a header
    /// row, but nothing here enforces that.
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Sheet {
        Sheet {
            name: name.into(),
            rows,
        }
    }

    /// The cell at (row, col), or `None` when the position is empty or out
    /// of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| cell_at(r, col))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A workbook: a display name plus its sheets in workbook order.
///
/// Sheet names are expected to be unique within a workbook; the engine
/// warns and keeps the later occurrence if a loader violates this.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    /// Display name used in reports, typically the file's base name.
    pub name: String,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(name: impl Into<String>, sheets: Vec<Sheet>) -> Workbook {
        Workbook {
            name: name.into(),
            sheets,
        }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name.as_str())
    }
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        if let CellValue::Text(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        if let CellValue::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let CellValue::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        if let CellValue::DateTime(dt) = self {
            Some(*dt)
        } else {
            None
        }
    }
}

/// Display renders the value the way reports do: key coercion, column
/// labels, and text output all go through this.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Integer-valued floats print without a fractional part, so a key of
/// `1.0` matches the literal "1".
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        let s = format!("{:.10}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
