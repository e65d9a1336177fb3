use crate::output::text;
use crate::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use workbook_diff::{
    compare, load_workbook, serialize_report_pretty, ColumnSelector, ComparisonReport, MatchConfig,
};

pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = build_config(cli)?;

    let workbook1 = load_workbook(&cli.file1)
        .with_context(|| format!("Failed to load workbook: {}", cli.file1))?;
    let workbook2 = load_workbook(&cli.file2)
        .with_context(|| format!("Failed to load workbook: {}", cli.file2))?;

    let report = compare(&workbook1, &workbook2, &config).context("Failed to compare workbooks")?;

    print_warnings_to_stderr(&report);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if let Some(path) = &cli.output {
        let json = serialize_report_pretty(&report).context("Failed to serialize report")?;
        fs::write(path, json).with_context(|| format!("Failed to write report to {}", path))?;
        writeln!(handle, "Results written to {}", path)?;
    } else if cli.json {
        let json = serialize_report_pretty(&report).context("Failed to serialize report")?;
        writeln!(handle, "{}", json)?;
    } else {
        text::write_text_report(&mut handle, &report)?;
    }

    Ok(exit_code_from_report(&report))
}

fn build_config(cli: &Cli) -> Result<MatchConfig> {
    let mut builder = MatchConfig::builder();
    if let Some(raw) = &cli.key_column {
        builder = builder.key_column(parse_key_column(raw));
    }
    if let Some(sheet) = &cli.sheet {
        builder = builder.sheet_filter(sheet.clone());
    }
    builder.build().context("Invalid comparison options")
}

/// All-digit arguments select a column by zero-based position; anything
/// else matches header text.
fn parse_key_column(raw: &str) -> ColumnSelector {
    match raw.parse::<usize>() {
        Ok(index) => ColumnSelector::Index(index),
        Err(_) => ColumnSelector::Header(raw.to_string()),
    }
}

fn print_warnings_to_stderr(report: &ComparisonReport) {
    for warning in &report.warnings {
        eprintln!("Warning: {}", warning);
    }
}

fn exit_code_from_report(report: &ComparisonReport) -> ExitCode {
    if report.has_differences() {
        ExitCode::from(1)
    } else {
        ExitCode::from(0)
    }
}
