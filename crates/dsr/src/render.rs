//! Tabular Rendering
//!
//! Renders result and summary records as aligned text tables for the
//! terminal. Long body cells are truncated for display; the JSON export
//! carries the full content.

use dsr_domain::value_objects::TabularRecord;

/// Widest a cell is rendered before truncation
const MAX_CELL_WIDTH: usize = 48;

/// Render records as an aligned text table with a header row.
pub fn render_table<T: TabularRecord>(records: &[T]) -> String {
    let headers = T::headers();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| r.row().into_iter().map(|cell| clip(&cell)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    render_row(&mut out, &widths, headers.iter().map(|h| h.to_string()));
    render_row(
        &mut out,
        &widths,
        widths.iter().map(|w| "-".repeat(*w)),
    );
    for row in rows {
        render_row(&mut out, &widths, row.into_iter());
    }
    out
}

fn render_row(out: &mut String, widths: &[usize], cells: impl Iterator<Item = String>) {
    let line = cells
        .enumerate()
        .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Flatten newlines and truncate with an ellipsis past the cell width.
fn clip(cell: &str) -> String {
    let flat = cell.replace(['\n', '\r'], " ");
    if flat.chars().count() <= MAX_CELL_WIDTH {
        flat
    } else {
        let truncated: String = flat.chars().take(MAX_CELL_WIDTH - 1).collect();
        format!("{truncated}\u{2026}")
    }
}
