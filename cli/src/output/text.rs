use anyhow::Result;
use std::io::Write;
use workbook_diff::{sentinel, CellValue, ComparisonReport, DiffValue, Difference};

pub fn write_text_report<W: Write>(w: &mut W, report: &ComparisonReport) -> Result<()> {
    writeln!(
        w,
        "Comparing {} and {}",
        report.file1_name, report.file2_name
    )?;
    writeln!(w)?;

    if report.differences.is_empty() {
        writeln!(w, "No differences found. Files are identical.")?;
        return Ok(());
    }

    writeln!(w, "Found {} difference(s):", report.differences.len())?;
    writeln!(w)?;

    let mut current_sheet: Option<&str> = None;
    for diff in &report.differences {
        if diff.is_sheet_presence() {
            writeln!(
                w,
                "Sheet \"{}\": only in {}",
                diff.sheet,
                presence_side(diff, report)
            )?;
            current_sheet = None;
        } else {
            if current_sheet != Some(diff.sheet.as_str()) {
                writeln!(w, "Sheet \"{}\":", diff.sheet)?;
                current_sheet = Some(diff.sheet.as_str());
            }
            writeln!(w, "  {}", render_difference(diff, report))?;
        }
    }

    write_summary(w, report)?;

    Ok(())
}

/// Display name of the side a presence difference exists on.
fn presence_side<'a>(diff: &Difference, report: &'a ComparisonReport) -> &'a str {
    let exists_in_first = matches!(
        &diff.value1,
        DiffValue::Note(note) if note == sentinel::SHEET_EXISTS || note == sentinel::ROW_EXISTS
    );
    if exists_in_first {
        &report.file1_name
    } else {
        &report.file2_name
    }
}

fn render_difference(diff: &Difference, report: &ComparisonReport) -> String {
    if diff.is_row_presence() {
        let location = if diff.cell1 == sentinel::NOT_APPLICABLE {
            &diff.cell2
        } else {
            &diff.cell1
        };
        return format!(
            "Key \"{}\": entire row only in {} ({})",
            diff.key_value,
            presence_side(diff, report),
            location
        );
    }

    if diff.key_value == sentinel::NOT_APPLICABLE {
        format!(
            "Cell {} ({}): {} → {}",
            diff.cell1,
            diff.column,
            format_value(&diff.value1),
            format_value(&diff.value2)
        )
    } else {
        format!(
            "Key \"{}\", {} ({} → {}): {} → {}",
            diff.key_value,
            diff.column,
            diff.cell1,
            diff.cell2,
            format_value(&diff.value1),
            format_value(&diff.value2)
        )
    }
}

fn format_value(value: &DiffValue) -> String {
    match value {
        DiffValue::Empty => "<empty>".to_string(),
        DiffValue::Note(note) => note.clone(),
        DiffValue::Cell(CellValue::Text(s)) => format!("\"{}\"", escape_string(s)),
        DiffValue::Cell(CellValue::Bool(b)) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        DiffValue::Cell(other) => other.to_string(),
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
        .replace('"', "\\\"")
}

fn write_summary<W: Write>(w: &mut W, report: &ComparisonReport) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "---")?;
    writeln!(w, "Summary:")?;
    writeln!(w, "  Total differences: {}", report.differences.len())?;

    let counts = count_differences(report);
    if counts.cells > 0 {
        writeln!(w, "  Cell changes: {}", counts.cells)?;
    }
    if counts.rows > 0 {
        writeln!(w, "  Row changes: {}", counts.rows)?;
    }
    if counts.sheets > 0 {
        writeln!(w, "  Sheet changes: {}", counts.sheets)?;
    }

    Ok(())
}

struct DiffCounts {
    cells: usize,
    rows: usize,
    sheets: usize,
}

fn count_differences(report: &ComparisonReport) -> DiffCounts {
    let mut counts = DiffCounts {
        cells: 0,
        rows: 0,
        sheets: 0,
    };

    for diff in &report.differences {
        if diff.is_sheet_presence() {
            counts.sheets += 1;
        } else if diff.is_row_presence() {
            counts.rows += 1;
        } else {
            counts.cells += 1;
        }
    }

    counts
}
