//! Workbook loading: the file-format boundary in front of the engine.
//!
//! Excel-family files (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) are read
//! through `calamine`; `.csv` files load as a single-sheet workbook. Loaded
//! grids are anchored at A1: when a sheet's data region starts below or
//! right of A1, leading empty rows and cells pad the grid so references in
//! reports match what a spreadsheet UI shows.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::workbook::{CellValue, Row, Sheet, Workbook};

/// Name given to the single sheet of a `.csv` workbook.
pub const CSV_SHEET_NAME: &str = "Sheet1";

/// Errors produced while loading workbooks from disk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("[WBDIFF_IO_001] file not found: {path}")]
    FileNotFound { path: String },

    #[error("[WBDIFF_IO_002] unsupported file format: {path}. Supported extensions: xlsx, xlsm, xlsb, xls, ods, csv.")]
    UnsupportedFormat { path: String },

    #[error("[WBDIFF_IO_003] failed to read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("[WBDIFF_IO_004] failed to read csv: {0}")]
    Csv(#[from] csv::Error),
}

impl LoadError {
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::FileNotFound { .. } => "WBDIFF_IO_001",
            LoadError::UnsupportedFormat { .. } => "WBDIFF_IO_002",
            LoadError::Spreadsheet(_) => "WBDIFF_IO_003",
            LoadError::Csv(_) => "WBDIFF_IO_004",
        }
    }
}

/// Load a workbook from disk, picking the reader from the file extension
/// (case-insensitive). The workbook's display name is the file's base name.
pub fn load_workbook(path: impl AsRef<Path>) -> Result<Workbook, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let name = workbook_name(path);
    match extension(path).as_deref() {
        Some("csv") => load_csv(path, name),
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => load_spreadsheet(path, name),
        _ => Err(LoadError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

fn workbook_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}

fn load_spreadsheet(path: &Path, name: String) -> Result<Workbook, LoadError> {
    let mut reader = open_workbook_auto(path)?;
    let sheet_names: Vec<String> = reader.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(sheet_names.len());
    for sheet_name in &sheet_names {
        let range = reader.worksheet_range(sheet_name)?;
        sheets.push(Sheet::new(sheet_name.clone(), convert_range(&range)));
    }
    Ok(Workbook::new(name, sheets))
}

/// Expand a calamine range into dense rows anchored at A1. Calamine ranges
/// start at the first used cell, so a sheet whose data begins at C3 gets two
/// leading empty rows and two leading empty cells per row.
fn convert_range(range: &calamine::Range<Data>) -> Vec<Row> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let mut rows: Vec<Row> = Vec::with_capacity(start_row as usize + range.height());
    rows.resize(start_row as usize, Vec::new());
    for cells in range.rows() {
        let mut row: Row = Vec::with_capacity(start_col as usize + cells.len());
        row.resize(start_col as usize, None);
        row.extend(cells.iter().map(convert_cell));
        rows.push(row);
    }
    rows
}

fn convert_cell(data: &Data) -> Option<CellValue> {
    match data {
        Data::Empty => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(n) => Some(CellValue::Number(*n)),
        Data::Int(n) => Some(CellValue::Number(*n as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => Some(CellValue::DateTime(datetime)),
            // Serials outside chrono's range keep their raw number.
            None => Some(CellValue::Number(dt.as_f64())),
        },
        Data::DateTimeIso(s) => Some(parse_iso_datetime(s)),
        Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => Some(CellValue::Text(e.to_string())),
    }
}

fn parse_iso_datetime(s: &str) -> CellValue {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return CellValue::DateTime(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return CellValue::DateTime(dt);
        }
    }
    CellValue::Text(s.to_string())
}

fn load_csv(path: &Path, name: String) -> Result<Workbook, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(csv_cell).collect());
    }
    Ok(Workbook::new(name, vec![Sheet::new(CSV_SHEET_NAME, rows)]))
}

/// CSV fields carry no type information; numeric-looking fields load as
/// numbers so they compare equal to the same values read from a spreadsheet
/// file.
fn csv_cell(field: &str) -> Option<CellValue> {
    if field.is_empty() {
        return None;
    }
    if let Ok(n) = field.parse::<f64>() {
        if n.is_finite() {
            return Some(CellValue::Number(n));
        }
    }
    Some(CellValue::Text(field.to_string()))
}
