//! Academics scoring: a structural table copy with accumulated numeric
//! columns and two synthetic grade rows. Unlike the activity categories the
//! source table is not filtered by individual.

use crate::workflows::appraisal::document::{writer, CellAlignment, DocTable, ReportDocument};
use crate::workflows::appraisal::domain::{safe_float, ScoreBucket, ScoreContext};
use crate::workflows::appraisal::grading::{grade_by_count, grade_by_percentage, grade_penalty};
use crate::workflows::appraisal::layout::tables;

/// Numeric columns accumulated across the copied rows.
const FIRST_SCORE_COL: usize = 4;
const SCORE_COLS: usize = 6;

/// Rows before this index are structural headings and are not copied.
const COPY_START_ROW: usize = 2;

const TOTAL_MARKER: &str = "total/average";
const TOTAL_LABEL: &str = "Total/Average";
const MARKS_LABEL: &str = "Marks(Ref guideline for awarding score)";

/// Copies `source` into the destination academics table until the
/// "Total/Average" marker row, accumulating columns 4..=9, then writes the
/// averages/sums row and the grade row. The academics bucket receives the
/// sum of the grade outputs. A missing source or destination table degrades
/// to a zero contribution.
pub(crate) fn populate_academics(
    source: Option<&DocTable>,
    document: &mut ReportDocument,
    ctx: &mut ScoreContext,
) {
    let Some(source) = source else {
        tracing::warn!("academics source table unavailable, category skipped");
        return;
    };
    let Some(destination) = document.table_mut(tables::ACADEMICS) else {
        tracing::warn!(table = tables::ACADEMICS, "academics table missing");
        return;
    };

    let mut sums = [0.0_f64; SCORE_COLS];
    let mut data_rows = 0usize;
    let mut finished = false;

    for i in COPY_START_ROW..source.rows.len() {
        let row = &source.rows[i];
        let first_cell = row
            .cells
            .first()
            .map(|cell| cell.text().trim().to_lowercase())
            .unwrap_or_default();

        if first_cell == TOTAL_MARKER {
            data_rows = i.saturating_sub(3);
            write_summary_rows(destination, i, &sums, data_rows);
            finished = true;
            break;
        }

        writer::ensure_row_at(destination, i);
        for (col, cell) in row.cells.iter().enumerate() {
            let text = cell.text().trim().to_string();
            writer::write_cell(destination, i, col, &text);
            if (FIRST_SCORE_COL..FIRST_SCORE_COL + SCORE_COLS).contains(&col) {
                sums[col - FIRST_SCORE_COL] += safe_float(&text);
            }
        }
    }

    if !finished {
        tracing::warn!("academics source has no Total/Average row, category skipped");
        return;
    }

    ctx.add(ScoreBucket::Academics, total_academics_score(&sums, data_rows));
}

/// The averages/sums row followed by the grade row, each with the first four
/// cells merged into a right-aligned label.
fn write_summary_rows(destination: &mut DocTable, start: usize, sums: &[f64; SCORE_COLS], data_rows: usize) {
    let average = if data_rows > 0 {
        sums[0] / data_rows as f64
    } else {
        0.0
    };

    for (offset, row_index) in (start..start + 2).enumerate() {
        writer::ensure_row_at(destination, row_index);

        if offset == 0 {
            writer::write_cell(destination, row_index, 0, TOTAL_LABEL);
            writer::write_cell(destination, row_index, FIRST_SCORE_COL, &format!("{average:.2}"));
            for k in 1..SCORE_COLS {
                writer::write_cell(
                    destination,
                    row_index,
                    FIRST_SCORE_COL + k,
                    &format!("{:.2}", sums[k]),
                );
            }
        } else {
            writer::write_cell(destination, row_index, 0, MARKS_LABEL);
            let grades = [
                grade_by_percentage(average),
                grade_by_count(sums[1]),
                grade_by_count(sums[2]),
                grade_by_count(sums[3]),
                grade_penalty(sums[4]),
                grade_penalty(sums[5]),
            ];
            for (k, grade) in grades.iter().enumerate() {
                writer::write_cell(
                    destination,
                    row_index,
                    FIRST_SCORE_COL + k,
                    &grade.to_string(),
                );
            }
        }

        destination.merge_cells(row_index, 0, FIRST_SCORE_COL);
        if let Some(label) = destination
            .rows
            .get_mut(row_index)
            .and_then(|row| row.cells.first_mut())
        {
            label.set_alignment(CellAlignment::Right);
        }
    }
}

/// Sum of the six grade outputs. The percentage grade participates only when
/// at least one data row was accumulated.
fn total_academics_score(sums: &[f64; SCORE_COLS], data_rows: usize) -> f64 {
    let mut total = 0;
    if data_rows > 0 {
        total += grade_by_percentage(sums[0] / data_rows as f64);
    }
    total += grade_by_count(sums[1]);
    total += grade_by_count(sums[2]);
    total += grade_by_count(sums[3]);
    total += grade_penalty(sums[4]);
    total += grade_penalty(sums[5]);
    total as f64
}
