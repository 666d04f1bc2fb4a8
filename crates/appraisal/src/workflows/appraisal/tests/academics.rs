use super::common::academics_source;
use crate::workflows::appraisal::categories::populate_academics;
use crate::workflows::appraisal::document::CellAlignment;
use crate::workflows::appraisal::domain::{ScoreBucket, ScoreContext};
use crate::workflows::appraisal::layout::{self, tables};

#[test]
fn academics_copy_accumulates_and_grades_the_numeric_columns() {
    let source = academics_source();
    let mut document = layout::standard_template();
    let mut ctx = ScoreContext::new();

    populate_academics(source.table(tables::ACADEMICS), &mut document, &mut ctx);

    // Column sums: 138, 3, 5, 0, 12, 0 over a divisor of 2 (marker row at
    // index 5 minus 3). Grades: 69 -> 1, 3 -> 2, 5 -> 3, 0 -> 5, 12 -> -2,
    // 0 -> -5.
    assert_eq!(ctx.bucket(ScoreBucket::Academics), 4.0);

    let table = document.table(tables::ACADEMICS).expect("table");
    // Copied data rows land at their source positions.
    assert_eq!(table.rows[2].cells[4].text(), "45");
    assert_eq!(table.rows[4].cells[6].text(), "1");

    // Averages/sums row at the marker position.
    let totals = &table.rows[5];
    assert_eq!(totals.cells[0].text(), "Total/Average");
    assert_eq!(totals.cells[0].span, 4);
    assert_eq!(totals.cells[0].paragraphs[0].alignment, CellAlignment::Right);
    assert_eq!(totals.cells[1].text(), "69.00");
    assert_eq!(totals.cells[2].text(), "3.00");

    // Grade row directly below.
    let marks = &table.rows[6];
    assert_eq!(marks.cells[0].text(), "Marks(Ref guideline for awarding score)");
    assert_eq!(marks.cells[1].text(), "1");
    assert_eq!(marks.cells[2].text(), "2");
    assert_eq!(marks.cells[3].text(), "3");
    assert_eq!(marks.cells[4].text(), "5");
    assert_eq!(marks.cells[5].text(), "-2");
    assert_eq!(marks.cells[6].text(), "-5");
}

#[test]
fn missing_source_table_contributes_zero() {
    let mut document = layout::standard_template();
    let mut ctx = ScoreContext::new();

    populate_academics(None, &mut document, &mut ctx);

    assert_eq!(ctx.bucket(ScoreBucket::Academics), 0.0);
    let table = document.table(tables::ACADEMICS).expect("table");
    assert_eq!(table.rows.len(), 2);
}

#[test]
fn source_without_marker_row_contributes_zero() {
    let mut source = academics_source();
    // Blank out the Total/Average marker.
    source.tables[tables::ACADEMICS].rows[5].cells[0].set_text("");
    let mut document = layout::standard_template();
    let mut ctx = ScoreContext::new();

    populate_academics(source.table(tables::ACADEMICS), &mut document, &mut ctx);

    assert_eq!(ctx.bucket(ScoreBucket::Academics), 0.0);
}
