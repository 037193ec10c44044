//! Plain-text rendering of table elements.

use crate::element::Element;
use crate::query::query_tag;
use crate::text::{display_width, pad_to_width, truncate_to_width};

const COLUMN_SEPARATOR: &str = "  ";

/// Extract the trimmed cell texts of every `tr` in `table`, row by row.
///
/// Rows of nested tables are not included. Rows may have different lengths.
pub fn table_grid(table: &Element) -> Vec<Vec<String>> {
    query_tag(table, "tr", Some("table"))
        .into_iter()
        .map(|row| {
            row.child_elements()
                .iter()
                .filter(|cell| cell.tag == "td" || cell.tag == "th")
                .map(|cell| cell.text_content().trim().to_string())
                .collect()
        })
        .collect()
}

/// Lay out a grid as aligned columns.
///
/// A dashed rule is drawn below the first `header_rows` rows. Cells wider
/// than `max_cell_width` (when given) are truncated with an ellipsis.
pub fn format_grid(grid: &[Vec<String>], header_rows: usize, max_cell_width: Option<usize>) -> String {
    let column_count = grid.iter().map(Vec::len).max().unwrap_or(0);
    if column_count == 0 {
        return String::new();
    }

    let cell = |text: &str| match max_cell_width {
        Some(max) => truncate_to_width(text, max),
        None => text.to_string(),
    };

    let mut widths = vec![0usize; column_count];
    for row in grid {
        for (idx, text) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(display_width(&cell(text)));
        }
    }

    let mut out = String::new();
    for (row_idx, row) in grid.iter().enumerate() {
        let line = widths
            .iter()
            .enumerate()
            .map(|(idx, width)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                pad_to_width(&cell(text), *width)
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
        out.push_str(line.trim_end());
        out.push('\n');

        if header_rows > 0 && row_idx + 1 == header_rows {
            let total = widths.iter().sum::<usize>() + COLUMN_SEPARATOR.len() * (column_count - 1);
            out.push_str(&"-".repeat(total));
            out.push('\n');
        }
    }

    log::trace!(
        "[render] formatted grid: rows={} columns={}",
        grid.len(),
        column_count
    );
    out
}
