//! Spreadsheet addressing helpers (A1-style references).

/// Convert a zero-based column index into its letter label:
/// 0 → "A", 25 → "Z", 26 → "AA", 701 → "ZZ", 702 → "AAA".
pub fn column_letter(col: usize) -> String {
    let mut col_index = col;
    let mut col_label = String::new();

    loop {
        let rem = (col_index % 26) as u8;
        col_label.push((b'A' + rem) as char);
        if col_index < 26 {
            break;
        }
        col_index = col_index / 26 - 1;
    }

    col_label.chars().rev().collect()
}

/// A1-style reference for a zero-based (row, column) position.
pub fn cell_reference(row: usize, col: usize) -> String {
    format!("{}{}", column_letter(col), row + 1)
}
