//! Workbook Diff: a library for comparing spreadsheet workbooks.
//!
//! This crate provides functionality for:
//! - Loading workbooks from Excel-family and CSV files (behind the `io`
//!   feature, enabled by default)
//! - Computing sheet-, row-, and cell-level differences between two
//!   workbooks, matched positionally or by a key column
//! - Streaming differences into a [`DiffSink`] or collecting them into a
//!   [`ComparisonReport`]
//! - Serializing reports to JSON
//!
//! # Quick Start
//!
//! ```ignore
//! use workbook_diff::{compare, load_workbook, MatchConfig};
//!
//! let old = load_workbook("old.xlsx")?;
//! let new = load_workbook("new.xlsx")?;
//! let report = compare(&old, &new, &MatchConfig::default())?;
//!
//! for diff in &report.differences {
//!     println!("{:?}", diff);
//! }
//! ```

mod addressing;
mod config;
mod diff;
mod engine;
#[cfg(feature = "io")]
mod loader;
mod output;
mod sink;
mod workbook;

pub use addressing::{cell_reference, column_letter};
pub use config::{ColumnSelector, ConfigError, MatchConfig, MatchConfigBuilder};
pub use diff::{
    sentinel, ColumnInfo, CompareSummary, ComparisonReport, DiffError, DiffValue, Difference,
};
pub use engine::{compare, compare_streaming};
#[cfg(feature = "io")]
pub use loader::{load_workbook, LoadError, CSV_SHEET_NAME};
pub use output::json::{serialize_report, serialize_report_pretty};
pub use output::json_lines::JsonLinesSink;
pub use sink::{CallbackSink, DiffSink, VecSink};
pub use workbook::{cell_at, CellValue, Row, Sheet, Workbook};
