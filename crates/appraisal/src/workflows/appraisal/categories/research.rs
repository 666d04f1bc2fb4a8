//! Research-bucket categories: journals, books, conferences, grants,
//! seminars, and patents.

use super::{append_category_total, Category, CategoryRule};
use crate::workflows::appraisal::document::{writer, ReportDocument};
use crate::workflows::appraisal::domain::{FacultyRecord, ScoreBucket, ScoreContext};
use crate::workflows::appraisal::layout::{tables, DETAIL_START_ROW};
use crate::workflows::appraisal::sheet::Extraction;

/// +2 per paper, with an impact-factor bonus tier on top. A missing or
/// unparseable impact factor earns the base points only.
pub(crate) struct JournalPublications;

impl CategoryRule for JournalPublications {
    fn category(&self) -> Category {
        Category::Journals
    }

    fn sheet(&self) -> &'static str {
        "Journal Publication"
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
        let Some(table) = document.table_mut(tables::JOURNALS) else {
            tracing::warn!(table = tables::JOURNALS, "journal table missing");
            return;
        };

        let mut total = 0.0;
        for (i, row) in extraction.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            writer::write_cell(table, row_index, 1, &row.text_or("Paper Title", "-"));
            writer::write_cell(table, row_index, 2, &row.text_or("Journal Name", "-"));
            writer::write_cell(table, row_index, 3, &row.text_or("Year of Publication", "-"));
            writer::write_cell(table, row_index, 4, &row.text_or("ISSN", "-"));
            writer::write_cell(table, row_index, 5, &row.text_or("Web Link", "-"));
            writer::write_cell(table, row_index, 6, &row.text_or("Impact Factor", "-"));

            if let Some(impact) = row.number_opt("Impact Factor") {
                if impact > 3.0 {
                    total += 3.0;
                    ctx.add_counter("r2_1", 3.0);
                } else if impact > 1.5 && impact <= 3.0 {
                    total += 2.0;
                    ctx.add_counter("r3_1", 2.0);
                } else if (1.0..=1.5).contains(&impact) {
                    total += 1.0;
                    ctx.add_counter("r4_1", 1.0);
                }
            }
            total += 2.0;
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::Research, total);
    }
}

/// +1 flat per book.
pub(crate) struct BookPublications;

impl CategoryRule for BookPublications {
    fn category(&self) -> Category {
        Category::Books
    }

    fn sheet(&self) -> &'static str {
        "Book Publication"
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
        let Some(table) = document.table_mut(tables::BOOKS) else {
            tracing::warn!(table = tables::BOOKS, "book table missing");
            return;
        };

        let mut total = 0.0;
        for (i, row) in extraction.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            writer::write_cell(table, row_index, 1, &row.text_or("Book Title", "-"));
            writer::write_cell(table, row_index, 2, &row.text_or("Publication Name", "-"));
            writer::write_cell(table, row_index, 3, &row.text_or("Date of Publication", "-"));
            writer::write_cell(table, row_index, 4, &row.text_or("ISBN", "-"));
            writer::write_cell(table, row_index, 5, &row.text_or("Description", "-"));
            total += 1.0;
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::Research, total);
    }
}

/// International presentations earn 2 points, all others 1. Rows split
/// across two destination tables by conference type; the shared totals row
/// goes to the international table when the template carries it.
pub(crate) struct Conferences;

impl CategoryRule for Conferences {
    fn category(&self) -> Category {
        Category::Conferences
    }

    fn sheet(&self) -> &'static str {
        "Conferences"
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

        let mut total = 0.0;
        let mut written = [0usize; 2];
        for row in extraction.iter() {
            let international = row
                .text_or("Conference Type", "")
                .trim()
                .eq_ignore_ascii_case("international");
            let (table_index, slot) = if international {
                total += 2.0;
                ctx.add_counter("r8_1", 2.0);
                (tables::CONFERENCES_INTERNATIONAL, 0)
            } else {
                total += 1.0;
                ctx.add_counter("r9_1", 1.0);
                (tables::CONFERENCES_OTHER, 1)
            };

            let Some(table) = document.table_mut(table_index) else {
                tracing::debug!(table = table_index, "conference table missing");
                continue;
            };
            let row_index = DETAIL_START_ROW + written[slot];
            written[slot] += 1;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &written[slot].to_string());
            writer::write_cell(table, row_index, 1, &row.text_or("Paper Title", "-"));
            writer::write_cell(table, row_index, 2, &row.text_or("Organized By", "-"));
            writer::write_cell(table, row_index, 3, &row.text_or("From Date", "-"));
            writer::write_cell(table, row_index, 4, &row.text_or("Place", "-"));
            writer::write_cell(table, row_index, 5, &row.text_or("Role", "-"));
        }

        let totals_index = if document.table(tables::CONFERENCES_INTERNATIONAL).is_some() {
            tables::CONFERENCES_INTERNATIONAL
        } else {
            tables::CONFERENCES_OTHER
        };
        if let Some(table) = document.table_mut(totals_index) {
            append_category_total(table, total);
        }
        ctx.add(ScoreBucket::Research, total);
    }
}

/// Grant applications score on the aggregate applied amount rather than per
/// row: 2 points per full million once the total exceeds one million.
pub(crate) struct GrantApplications;

impl CategoryRule for GrantApplications {
    fn category(&self) -> Category {
        Category::GrantApplications
    }

    fn sheet(&self) -> &'static str {
        "Research Grant"
    }

    fn apply(
        &self,
        _faculty: &FacultyRecord,
        extraction: &Extraction,
        document: &mut ReportDocument,
        ctx: &mut ScoreContext,
    ) {
        let applied: Vec<_> = extraction
            .iter()
            .filter(|row| {
                row.text_or("Coordinator", "-")
                    .trim()
                    .eq_ignore_ascii_case("applied")
            })
            .collect();
        if applied.is_empty() {
            return;
        }
        let Some(table) = document.table_mut(tables::GRANT_APPLICATIONS) else {
            tracing::warn!(table = tables::GRANT_APPLICATIONS, "grant table missing");
            return;
        };

        let mut total_amount = 0.0;
        for (i, row) in applied.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            writer::write_cell(table, row_index, 1, &row.text_or("Coordinator", "-"));
            writer::write_cell(table, row_index, 2, &row.text_or("Title", "-"));
            writer::write_cell(table, row_index, 3, &row.text_or("Type", "-"));
            writer::write_cell(table, row_index, 4, &row.text_or("Funding Agent", "-"));
            writer::write_cell(table, row_index, 5, &row.text_or("Amount", "-"));
            writer::write_cell(table, row_index, 6, &row.text_or("Applied On", "-"));

            let amount = row.number("Amount");
            if amount > 0.0 {
                total_amount += amount;
            }
        }

        let mut total = 0.0;
        if total_amount > 1_000_000.0 {
            let points = (total_amount / 1_000_000.0).floor() * 2.0;
            total += points;
            ctx.add_counter("r10_1", points);
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::Research, total);
    }
}

/// Seminar rows live on the grant sheet with any coordinator value other
/// than "applied"; each one earns a point per 50,000 of funding.
pub(crate) struct Seminars;

impl CategoryRule for Seminars {
    fn category(&self) -> Category {
        Category::Seminars
    }

    fn sheet(&self) -> &'static str {
        "Research Grant"
    }

    fn apply(
        &self,
        _faculty: &FacultyRecord,
        extraction: &Extraction,
        document: &mut ReportDocument,
        ctx: &mut ScoreContext,
    ) {
        let seminars: Vec<_> = extraction
            .iter()
            .filter(|row| {
                !row.text_or("Coordinator", "-")
                    .trim()
                    .eq_ignore_ascii_case("applied")
            })
            .collect();
        if seminars.is_empty() {
            return;
        }
        let Some(table) = document.table_mut(tables::SEMINARS) else {
            tracing::warn!(table = tables::SEMINARS, "seminar table missing");
            return;
        };

        let mut total = 0.0;
        for (i, row) in seminars.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            writer::write_cell(table, row_index, 1, &row.text_or("Coordinator", "-"));
            writer::write_cell(table, row_index, 2, &row.text_or("Title", "-"));
            writer::write_cell(table, row_index, 3, &row.text_or("Type", "-"));
            writer::write_cell(table, row_index, 4, &row.text_or("Funding Agent", "-"));
            writer::write_cell(table, row_index, 5, &row.text_or("Amount", "-"));
            writer::write_cell(table, row_index, 6, &row.text_or("Applied On", "-"));

            let amount = row.number("Amount");
            if amount > 50_000.0 {
                let points = (amount / 50_000.0).floor();
                total += points;
                ctx.add_counter("r11_1", points);
            }
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::Research, total);
    }
}

/// Only a published patent scores (+5). A filed patent records its filing
/// date and nothing else; that zero-point branch is preserved as-is pending
/// product clarification.
pub(crate) struct Patents;

impl CategoryRule for Patents {
    fn category(&self) -> Category {
        Category::Patents
    }

    fn sheet(&self) -> &'static str {
        "Patents"
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
        let Some(table) = document.table_mut(tables::PATENTS) else {
            tracing::warn!(table = tables::PATENTS, "patent table missing");
            return;
        };

        let mut total = 0.0;
        for (i, row) in extraction.iter().enumerate() {
            let row_index = DETAIL_START_ROW + i;
            writer::ensure_row_at(table, row_index);
            writer::write_cell(table, row_index, 0, &(i + 1).to_string());
            writer::write_cell(table, row_index, 1, &row.text_or("Title", "-"));

            let status = row.text_or("Status", "");
            let date_value = row.text_or("Date", "-");
            match status.trim().to_lowercase().as_str() {
                "filed" => {
                    writer::write_cell(table, row_index, 2, &date_value);
                    writer::write_cell(table, row_index, 3, "-");
                }
                "published" => {
                    writer::write_cell(table, row_index, 2, "-");
                    writer::write_cell(table, row_index, 3, &date_value);
                    total += 5.0;
                    ctx.add_counter("r12_1", 5.0);
                }
                _ => {
                    writer::write_cell(table, row_index, 2, "-");
                    writer::write_cell(table, row_index, 3, "-");
                }
            }
            writer::write_cell(table, row_index, 4, &row.text_or("Status", "-"));
        }

        append_category_total(table, total);
        ctx.add(ScoreBucket::Research, total);
    }
}
