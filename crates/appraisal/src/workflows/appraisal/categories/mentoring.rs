//! Project/hackathon mentoring.

use super::{append_category_total, Category, CategoryRule};
use crate::workflows::appraisal::document::{writer, ReportDocument};
use crate::workflows::appraisal::domain::{FacultyRecord, ScoreBucket, ScoreContext};
use crate::workflows::appraisal::layout::{tables, DETAIL_START_ROW};
use crate::workflows::appraisal::sheet::Extraction;

/// Fixed category score of 1 whenever any mentoring row is present. The
/// score is assigned per row rather than accumulated (last-row overwrite);
/// flagged for product review, left as-is until the rule owners decide.
pub(crate) struct ProjectMentoring;

impl CategoryRule for ProjectMentoring {
    fn category(&self) -> Category {
        Category::Mentoring
    }

    fn sheet(&self) -> &'static str {
        "Project Guided or Mentoring"
    }

    fn apply(
        &self,
        _faculty: &FacultyRecord,
        extraction: &Extraction,
        document: &mut ReportDocument,
        ctx: &mut ScoreContext,
    ) {
        if extraction.is_empty() {
            return;
        }
        let Some(table) = document.table_mut(tables::MENTORING) else {
            tracing::warn!(table = tables::MENTORING, "mentoring table missing");
            return;
        };

        let mut total = 0.0;
        for (i, row) in extraction.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            writer::write_cell(table, row_index, 1, &row.text_or("Project Title", "-"));
            writer::write_cell(table, row_index, 2, &row.text_or("Number of Students", "-"));
            writer::write_cell(table, row_index, 3, &row.text_or("Title of Hackathon", "-"));
            writer::write_cell(table, row_index, 4, &row.text_or("Organized By", "-"));
            writer::write_cell(table, row_index, 5, &row.text_or("Date", "-"));
            writer::write_cell(table, row_index, 6, &row.text_or("Status", "-"));

            total = 1.0;
            ctx.set_counter("s1_1", 1.0);
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::Mentoring, total);
    }
}
