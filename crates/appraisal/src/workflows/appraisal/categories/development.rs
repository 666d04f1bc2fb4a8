//! Self-development categories: workshops, internships/FDP, MOOC courses,
//! MoUs, and guest lectures.

use super::{append_category_total, date_range, Category, CategoryRule};
use crate::workflows::appraisal::document::{writer, ReportDocument};
use crate::workflows::appraisal::domain::{FacultyRecord, ScoreBucket, ScoreContext};
use crate::workflows::appraisal::layout::{tables, DETAIL_START_ROW};
use crate::workflows::appraisal::sheet::Extraction;

/// +1 per workshop attended, capped at 3 for the category. Every attended
/// row is still written out, capped or not.
pub(crate) struct WorkshopsAttended;

impl CategoryRule for WorkshopsAttended {
    fn category(&self) -> Category {
        Category::WorkshopsAttended
    }

    fn sheet(&self) -> &'static str {
        "Workshop"
    }

    fn apply(
        &self,
        _faculty: &FacultyRecord,
        extraction: &Extraction,
        document: &mut ReportDocument,
        ctx: &mut ScoreContext,
    ) {
        let attended: Vec<_> = extraction
            .iter()
            .filter(|row| {
                row.text_or("Role", "")
                    .trim()
                    .eq_ignore_ascii_case("attended")
            })
            .collect();
        if attended.is_empty() {
            return;
        }
        let Some(table) = document.table_mut(tables::WORKSHOPS_ATTENDED) else {
            tracing::warn!(table = tables::WORKSHOPS_ATTENDED, "workshop table missing");
            return;
        };

        let mut total = 0.0;
        for (i, row) in attended.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            writer::write_cell(table, row_index, 1, &row.text_or("Topic", "-"));
            writer::write_cell(table, row_index, 2, &date_range(row));
            writer::write_cell(table, row_index, 3, &row.text_or("Description", "-"));
            writer::write_cell(table, row_index, 4, &row.text_or("Venue", "-"));

            if total < 3.0 {
                total += 1.0;
                ctx.add_counter("p1_1", 1.0);
            }
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::SelfDevelopment, total);
    }
}

/// +3 per faculty internship / FDP, uncapped.
pub(crate) struct FacultyInternships;

impl CategoryRule for FacultyInternships {
    fn category(&self) -> Category {
        Category::FacultyInternships
    }

    fn sheet(&self) -> &'static str {
        "Faculty Internship"
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
        let Some(table) = document.table_mut(tables::FACULTY_INTERNSHIPS) else {
            tracing::warn!(
                table = tables::FACULTY_INTERNSHIPS,
                "internship table missing"
            );
            return;
        };

        let mut total = 0.0;
        for (i, row) in extraction.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            writer::write_cell(table, row_index, 1, &row.text_or("FDP Name", "-"));
            writer::write_cell(table, row_index, 2, &date_range(&row));
            writer::write_cell(table, row_index, 3, &row.text_or("Description", "-"));
            writer::write_cell(
                table,
                row_index,
                4,
                &row.text_or("National or International", "-"),
            );

            total += 3.0;
            ctx.add_counter("p2_1", 3.0);
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::SelfDevelopment, total);
    }
}

/// +2 per MOOC course, capped at 4 for the category.
pub(crate) struct MoocCourses;

impl CategoryRule for MoocCourses {
    fn category(&self) -> Category {
        Category::MoocCourses
    }

    fn sheet(&self) -> &'static str {
        "MOOC Course"
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
        let Some(table) = document.table_mut(tables::MOOC_COURSES) else {
            tracing::warn!(table = tables::MOOC_COURSES, "mooc table missing");
            return;
        };

        let mut total = 0.0;
        for (i, row) in extraction.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            // "Coure Title" is the label as it appears in the circulated
            // workbook format.
            writer::write_cell(table, row_index, 1, &row.text_or("Coure Title", "-"));
            writer::write_cell(table, row_index, 2, &row.text_or("Course Type", "-"));
            writer::write_cell(table, row_index, 3, &date_range(&row));
            writer::write_cell(table, row_index, 4, &row.text_or("Duration", "-"));
            writer::write_cell(table, row_index, 5, &row.text_or("Awards", "-"));

            if total < 4.0 {
                total += 2.0;
                ctx.add_counter("p3_1", 2.0);
            }
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::SelfDevelopment, total);
    }
}

/// +1 per memorandum of understanding, uncapped.
pub(crate) struct MemorandaOfUnderstanding;

impl CategoryRule for MemorandaOfUnderstanding {
    fn category(&self) -> Category {
        Category::MemorandaOfUnderstanding
    }

    fn sheet(&self) -> &'static str {
        "MoU"
    }

    fn apply(
        &self,
        faculty: &FacultyRecord,
        extraction: &Extraction,
        document: &mut ReportDocument,
        ctx: &mut ScoreContext,
    ) {
        if extraction.is_empty() {
            return;
        }
        let Some(table) = document.table_mut(tables::MOU) else {
            tracing::warn!(table = tables::MOU, "mou table missing");
            return;
        };

        let mut total = 0.0;
        for (i, row) in extraction.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            writer::write_cell(table, row_index, 1, faculty.match_name());
            writer::write_cell(table, row_index, 2, &row.text_or("Company Name", "-"));
            writer::write_cell(table, row_index, 3, &date_range(&row));
            writer::write_cell(table, row_index, 4, &row.text_or("Industry SPOC", "-"));
            writer::write_cell(table, row_index, 5, &row.text_or("Duration", "-"));

            total += 1.0;
            ctx.add_counter("p4_1", 1.0);
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::SelfDevelopment, total);
    }
}

/// +0.5 per workshop conducted, uncapped. Reads the "Workshops" sheet, a
/// separate sheet from the attended "Workshop" one.
pub(crate) struct WorkshopsConducted;

impl CategoryRule for WorkshopsConducted {
    fn category(&self) -> Category {
        Category::WorkshopsConducted
    }

    fn sheet(&self) -> &'static str {
        "Workshops"
    }

    fn apply(
        &self,
        _faculty: &FacultyRecord,
        extraction: &Extraction,
        document: &mut ReportDocument,
        ctx: &mut ScoreContext,
    ) {
        let conducted: Vec<_> = extraction
            .iter()
            .filter(|row| {
                row.text_or("Role", "")
                    .trim()
                    .eq_ignore_ascii_case("conducted")
            })
            .collect();
        if conducted.is_empty() {
            return;
        }
        let Some(table) = document.table_mut(tables::WORKSHOPS_CONDUCTED) else {
            tracing::warn!(
                table = tables::WORKSHOPS_CONDUCTED,
                "conducted-workshop table missing"
            );
            return;
        };

        let mut total = 0.0;
        for (i, row) in conducted.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            writer::write_cell(table, row_index, 1, &row.text_or("Topic", "-"));
            writer::write_cell(table, row_index, 2, &row.text_or("Department", "-"));
            writer::write_cell(table, row_index, 3, &date_range(row));
            writer::write_cell(table, row_index, 4, &row.text_or("No of Students", "-"));
            writer::write_cell(table, row_index, 5, &row.text_or("Venue", "-"));
            writer::write_cell(table, row_index, 6, &row.text_or("Description", "-"));

            total += 0.5;
            ctx.add_counter("p6_1", 0.5);
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::SelfDevelopment, total);
    }
}

/// +1 per guest lecture organized, uncapped.
pub(crate) struct GuestLectures;

impl CategoryRule for GuestLectures {
    fn category(&self) -> Category {
        Category::GuestLectures
    }

    fn sheet(&self) -> &'static str {
        "Guest Lectures"
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
        let Some(table) = document.table_mut(tables::GUEST_LECTURES) else {
            tracing::warn!(table = tables::GUEST_LECTURES, "guest lecture table missing");
            return;
        };

        let mut total = 0.0;
        for (i, row) in extraction.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            writer::write_cell(table, row_index, 1, &row.text_or("Chief Guest Name", "-"));
            writer::write_cell(table, row_index, 2, &row.text_or("Address", "-"));
            writer::write_cell(table, row_index, 3, &row.text_or("Topic Name", "-"));
            writer::write_cell(table, row_index, 4, &date_range(&row));
            writer::write_cell(table, row_index, 5, &row.text_or("Description", "-"));
            writer::write_cell(table, row_index, 6, &row.text_or("Topic Delivered", "-"));

            total += 1.0;
            ctx.add_counter("p7_1", 1.0);
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::SelfDevelopment, total);
    }
}
