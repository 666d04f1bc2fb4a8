//! Growable-table write primitives shared by every category rule.

use super::model::{CellAlignment, DocRow, DocTable};

/// Grows `table` with empty rows until `index` is a valid row position.
/// Idempotent; appended rows take the template grid width.
pub(crate) fn ensure_row_at(table: &mut DocTable, index: usize) {
    let width = table.width();
    while table.rows.len() <= index {
        table.rows.push(DocRow::empty(width));
    }
}

/// Sets a cell's text. A cell outside the template grid is skipped with a
/// diagnostic; the rest of the row proceeds. Returns whether the write
/// landed.
pub(crate) fn write_cell(table: &mut DocTable, row: usize, col: usize, text: &str) -> bool {
    let Some(cell) = table
        .rows
        .get_mut(row)
        .and_then(|row| row.cells.get_mut(col))
    else {
        tracing::debug!(row, col, "cell outside template grid, write skipped");
        return false;
    };
    cell.set_text(text);
    true
}

/// Appends the category totals row: the first `label_cols` cells merge into
/// one right-aligned label cell and the numeric total lands in the last
/// cell.
pub(crate) fn append_totals_row(table: &mut DocTable, label_cols: usize, total_text: &str) {
    let width = table.width();
    let mut row = DocRow::empty(width);
    if let Some(last) = row.cells.last_mut() {
        last.set_text(total_text);
    }
    table.rows.push(row);

    let index = table.rows.len() - 1;
    table.merge_cells(index, 0, label_cols);
    if let Some(label) = table
        .rows
        .get_mut(index)
        .and_then(|row| row.cells.first_mut())
    {
        label.set_alignment(CellAlignment::Right);
    }
}
