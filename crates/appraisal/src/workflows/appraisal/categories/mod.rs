//! One rule per activity category. Every rule consumes the rows already
//! filtered to the individual, writes detail rows plus a totals row into its
//! destination table, and feeds exactly one score bucket (and, where
//! applicable, one counter slot).

pub(crate) mod academics;
pub(crate) mod development;
pub(crate) mod mentoring;
pub(crate) mod research;

use super::document::{writer, DocTable, ReportDocument};
use super::domain::{render_number, FacultyRecord, ScoreContext};
use super::sheet::{Extraction, RowView};

pub(crate) use academics::populate_academics;

/// Activity categories in their standard processing order. Scoring is
/// additive and order-independent across categories; this order only fixes
/// the sequence of diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Journals,
    Books,
    Conferences,
    GrantApplications,
    Seminars,
    Patents,
    WorkshopsAttended,
    FacultyInternships,
    MoocCourses,
    MemorandaOfUnderstanding,
    WorkshopsConducted,
    GuestLectures,
    Mentoring,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Journals => "journal publications",
            Self::Books => "book publications",
            Self::Conferences => "conferences",
            Self::GrantApplications => "research grant applications",
            Self::Seminars => "seminars",
            Self::Patents => "patents",
            Self::WorkshopsAttended => "workshops attended",
            Self::FacultyInternships => "faculty internships",
            Self::MoocCourses => "mooc courses",
            Self::MemorandaOfUnderstanding => "memoranda of understanding",
            Self::WorkshopsConducted => "workshops conducted",
            Self::GuestLectures => "guest lectures",
            Self::Mentoring => "project mentoring",
        }
    }
}

/// A category's extraction, scoring, and table-population behavior. Rules
/// are stateless; all accumulation happens in the per-run [`ScoreContext`].
pub(crate) trait CategoryRule: Send + Sync {
    fn category(&self) -> Category;

    /// Source sheet this rule reads. Two rules may share a sheet; the engine
    /// extracts each sheet once.
    fn sheet(&self) -> &'static str;

    fn apply(
        &self,
        faculty: &FacultyRecord,
        extraction: &Extraction,
        document: &mut ReportDocument,
        ctx: &mut ScoreContext,
    );
}

/// All category rules in standard order.
pub(crate) fn standard_rules() -> Vec<Box<dyn CategoryRule>> {
    vec![
        Box::new(research::JournalPublications),
        Box::new(research::BookPublications),
        Box::new(research::Conferences),
        Box::new(research::GrantApplications),
        Box::new(research::Seminars),
        Box::new(research::Patents),
        Box::new(development::WorkshopsAttended),
        Box::new(development::FacultyInternships),
        Box::new(development::MoocCourses),
        Box::new(development::MemorandaOfUnderstanding),
        Box::new(development::WorkshopsConducted),
        Box::new(development::GuestLectures),
        Box::new(mentoring::ProjectMentoring),
    ]
}

/// "From Date" and "To Date" rendered as one range cell.
fn date_range(row: &RowView<'_>) -> String {
    let from = row.text_or("From Date", "-");
    let to = row.text_or("To Date", "-");
    format!("{from} to {to}")
}

/// Appends the category totals row: merged right-aligned label cells and the
/// numeric total in the rightmost cell.
fn append_category_total(table: &mut DocTable, total: f64) {
    let label_cols = table.width().saturating_sub(1);
    writer::append_totals_row(table, label_cols, &render_number(total));
}
