use super::source::SheetSource;

/// Cell texts that mark a header row, compared lowercase and trimmed.
const HEADER_MARKERS: [&str; 2] = ["faculty name", "name of the faculty"];

/// Only a bounded prefix of the sheet is scanned for the header.
const HEADER_SCAN_ROWS: usize = 15;

/// Finds the zero-based index of the header row in `sheet`, scanning the
/// first [`HEADER_SCAN_ROWS`] rows top-down. `None` means downstream reads
/// assume the sheet starts directly with its header row.
pub(crate) fn find_header_row(source: &dyn SheetSource, sheet: &str) -> Option<usize> {
    let rows = match source.rows(sheet, 0, Some(HEADER_SCAN_ROWS)) {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!(sheet, %err, "header scan failed");
            return None;
        }
    };

    rows.iter().position(|row| {
        row.iter().any(|cell| {
            let text = cell.trim().to_lowercase();
            HEADER_MARKERS.contains(&text.as_str())
        })
    })
}
