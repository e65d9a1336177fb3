//! Core comparison engine.
//!
//! Provides the main entry point [`compare`] for comparing two workbooks
//! into a [`ComparisonReport`], and [`compare_streaming`] for feeding each
//! difference to a [`DiffSink`] as it is found.
//!
//! ## Module Structure
//!
//! - `positional`: row-by-row, cell-by-cell comparison
//! - `keyed`: key-column row matching and per-key cell comparison
//! - `headers`: key resolution, column labels, and column extraction
//! - `context`: shared warning and emission state

mod context;
mod headers;
mod keyed;
mod positional;

use rustc_hash::FxHashMap;

use crate::config::MatchConfig;
use crate::diff::{CompareSummary, ComparisonReport, DiffError, Difference};
use crate::sink::{DiffSink, VecSink};
use crate::workbook::{CellValue, Sheet, Workbook};
use context::{emit, DiffContext};

/// Two cells differ unless they are strictly equal in type and value.
/// Empty cells (absent, blank, or past a row's end) are equivalent to each
/// other but differ from every present value, including the empty string.
fn values_differ(a: Option<&CellValue>, b: Option<&CellValue>) -> bool {
    match (a, b) {
        (None, None) => false,
        (Some(x), Some(y)) => x != y,
        _ => true,
    }
}

/// Compare two workbooks into a [`ComparisonReport`].
pub fn compare(
    a: &Workbook,
    b: &Workbook,
    config: &MatchConfig,
) -> Result<ComparisonReport, DiffError> {
    let mut sink = VecSink::new();
    let summary = compare_streaming(a, b, config, &mut sink)?;
    Ok(ComparisonReport::from_differences_and_summary(
        sink.into_differences(),
        summary,
        &a.name,
        &b.name,
    ))
}

/// Compare two workbooks, streaming each difference into `sink`.
///
/// Differences arrive grouped by sheet: cell and row differences for every
/// common sheet in the first workbook's sheet order, then sheets present
/// only in the first workbook, then sheets present only in the second.
pub fn compare_streaming<S: DiffSink>(
    a: &Workbook,
    b: &Workbook,
    config: &MatchConfig,
    sink: &mut S,
) -> Result<CompareSummary, DiffError> {
    let mut ctx = DiffContext::default();

    let sheets1 = index_sheets(a, "file 1", &mut ctx.warnings);
    let sheets2 = index_sheets(b, "file 2", &mut ctx.warnings);

    if let Some(filter) = &config.sheet_filter {
        ensure_sheet_exists(&sheets1, filter, a)?;
        ensure_sheet_exists(&sheets2, filter, b)?;
    }

    sink.begin()?;
    let mut count = 0usize;

    let names1 = sheet_order(a, config);
    let names2 = sheet_order(b, config);

    let mut common: Vec<(&str, &Sheet, &Sheet)> = Vec::new();
    for name in &names1 {
        if let (Some(&sheet1), Some(&sheet2)) = (sheets1.get(*name), sheets2.get(*name)) {
            common.push((name, sheet1, sheet2));
        }
    }

    for &(name, sheet1, sheet2) in &common {
        compare_sheet(name, sheet1, sheet2, config, &mut ctx, sink, &mut count)?;
    }

    for name in &names1 {
        if !sheets2.contains_key(*name) {
            emit(sink, &mut count, Difference::sheet_only_in_first(*name))?;
        }
    }
    for name in &names2 {
        if !sheets1.contains_key(*name) {
            emit(sink, &mut count, Difference::sheet_only_in_second(*name))?;
        }
    }

    let columns = common
        .first()
        .map(|&(_, sheet1, _)| headers::extract_columns(&sheet1.rows));

    sink.finish()?;

    Ok(CompareSummary {
        difference_count: count,
        warnings: ctx.warnings,
        columns,
    })
}

fn compare_sheet<S: DiffSink>(
    name: &str,
    sheet1: &Sheet,
    sheet2: &Sheet,
    config: &MatchConfig,
    ctx: &mut DiffContext,
    sink: &mut S,
    count: &mut usize,
) -> Result<(), DiffError> {
    if let Some(selector) = &config.key_column {
        // Keyed matching needs data on both sides; a sheet that is empty on
        // either side is compared positionally without a warning.
        if !sheet1.is_empty() && !sheet2.is_empty() {
            match (
                headers::resolve_key_index(&sheet1.rows, selector),
                headers::resolve_key_index(&sheet2.rows, selector),
            ) {
                (Some(key1), Some(key2)) => {
                    return keyed::compare_keyed(
                        name,
                        &sheet1.rows,
                        &sheet2.rows,
                        key1,
                        key2,
                        sink,
                        count,
                    );
                }
                _ => {
                    ctx.warnings.push(format!(
                        "Key column \"{}\" not found in one or both files for sheet \"{}\". Using direct comparison instead.",
                        selector, name,
                    ));
                }
            }
        }
    }
    positional::compare_positional(name, &sheet1.rows, &sheet2.rows, sink, count)
}

/// Index sheets by name, warning when a workbook reuses a name. The later
/// occurrence wins the lookup; iteration order is handled separately.
fn index_sheets<'a>(
    workbook: &'a Workbook,
    side: &str,
    warnings: &mut Vec<String>,
) -> FxHashMap<&'a str, &'a Sheet> {
    let mut by_name = FxHashMap::default();
    for sheet in &workbook.sheets {
        if by_name.insert(sheet.name.as_str(), sheet).is_some() {
            warnings.push(format!(
                "Duplicate sheet name \"{}\" in {}; comparing the last occurrence.",
                sheet.name, side,
            ));
        }
    }
    by_name
}

/// Sheet names in workbook order with duplicates collapsed, or just the
/// filtered sheet when a filter is set.
fn sheet_order<'a>(workbook: &'a Workbook, config: &'a MatchConfig) -> Vec<&'a str> {
    if let Some(filter) = &config.sheet_filter {
        return vec![filter.as_str()];
    }
    let mut names: Vec<&str> = Vec::with_capacity(workbook.sheets.len());
    for sheet in &workbook.sheets {
        if !names.contains(&sheet.name.as_str()) {
            names.push(sheet.name.as_str());
        }
    }
    names
}

fn ensure_sheet_exists(
    sheets: &FxHashMap<&str, &Sheet>,
    requested: &str,
    workbook: &Workbook,
) -> Result<(), DiffError> {
    if sheets.contains_key(requested) {
        return Ok(());
    }
    Err(DiffError::SheetNotFound {
        requested: requested.to_string(),
        workbook: workbook.name.clone(),
        available: workbook.sheet_names().map(str::to_string).collect(),
    })
}
