mod commands;
mod output;

use clap::Parser;
use std::process::ExitCode;
use workbook_diff::DiffError;

#[derive(Parser)]
#[command(name = "workbook-diff")]
#[command(about = "Compare two spreadsheet workbooks and show differences")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Path to the first workbook (xlsx, xlsm, xlsb, xls, ods, csv)")]
    pub file1: String,
    #[arg(help = "Path to the second workbook")]
    pub file2: String,
    #[arg(long, short, help = "Compare only this sheet (must exist in both files)")]
    pub sheet: Option<String>,
    #[arg(
        long,
        short,
        value_name = "COLUMN",
        help = "Match rows by this key column: a header name, or a zero-based index"
    )]
    pub key_column: Option<String>,
    #[arg(long, short, value_name = "PATH", help = "Write the JSON report to a file")]
    pub output: Option<String>,
    #[arg(long, help = "Print the report as JSON instead of text")]
    pub json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::compare::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e)
        }
    }
}

fn exit_code_for_error(err: &anyhow::Error) -> ExitCode {
    if is_internal_error(err) {
        ExitCode::from(3)
    } else {
        ExitCode::from(2)
    }
}

fn is_internal_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        if let Some(diff_err) = cause.downcast_ref::<DiffError>() {
            return !matches!(diff_err, DiffError::SheetNotFound { .. });
        }
        false
    })
}
