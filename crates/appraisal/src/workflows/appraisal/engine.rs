use std::collections::BTreeMap;

use super::categories::{populate_academics, standard_rules, CategoryRule};
use super::document::{placeholders, ReportDocument};
use super::domain::{FacultyRecord, ScoreContext, ScoreSummary};
use super::layout::tables;
use super::sheet::{extract_for, find_header_row, Extraction, SheetSource, SheetTable, NAME_ALIASES};
use super::weights;

/// Everything one appraisal run consumes. Templates are moved in and
/// returned populated; the caller is responsible for resolving the
/// corrective-template fallback before building the inputs.
pub struct AppraisalInputs<'a> {
    pub faculty: &'a FacultyRecord,
    pub source: &'a dyn SheetSource,
    pub primary_template: ReportDocument,
    pub corrective_template: ReportDocument,
    /// Scores document whose structural table feeds the academics category.
    pub academics_source: Option<ReportDocument>,
}

/// Populated documents plus the score snapshot for downstream persistence.
#[derive(Debug)]
pub struct AppraisalOutcome {
    pub primary: ReportDocument,
    pub corrective: ReportDocument,
    pub summary: ScoreSummary,
}

/// Sequences the category rules over one faculty member's workbook. The
/// engine holds no per-run state; every run gets a fresh [`ScoreContext`],
/// and per-category failures degrade to a zero contribution with a
/// diagnostic rather than aborting the run.
pub struct AppraisalEngine {
    rules: Vec<Box<dyn CategoryRule>>,
}

impl AppraisalEngine {
    pub fn new() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    pub fn run(&self, inputs: AppraisalInputs<'_>) -> AppraisalOutcome {
        let AppraisalInputs {
            faculty,
            source,
            primary_template,
            corrective_template,
            academics_source,
        } = inputs;

        let mut primary = primary_template;
        let mut corrective = corrective_template;
        let mut ctx = ScoreContext::new();

        populate_academics(
            academics_source
                .as_ref()
                .and_then(|doc| doc.table(tables::ACADEMICS)),
            &mut primary,
            &mut ctx,
        );

        let mut extractions: BTreeMap<&'static str, Extraction> = BTreeMap::new();

        for rule in &self.rules {
            let sheet = rule.sheet();
            if !source.has_sheet(sheet) {
                tracing::debug!(
                    category = rule.category().label(),
                    sheet,
                    "sheet absent, category skipped"
                );
                continue;
            }

            let extraction = extractions
                .entry(sheet)
                .or_insert_with(|| extract_sheet(source, sheet, faculty.match_name()));
            rule.apply(faculty, extraction, &mut primary, &mut ctx);
        }

        let breakdown =
            weights::weighted_breakdown(faculty.designation_kind(), ctx.bucket_vector());
        weights::populate_weight_table(&mut corrective, &breakdown);

        placeholders::primary_map(faculty, &ctx).apply(&mut primary);
        placeholders::corrective_map(&ctx).apply(&mut corrective);

        let summary = ctx.snapshot(breakdown);
        tracing::info!(
            faculty = faculty.match_name(),
            research = summary.buckets.research,
            self_development = summary.buckets.self_development,
            mentoring = summary.buckets.mentoring,
            academics = summary.buckets.academics,
            weighted_total = summary.weighted.total,
            "appraisal computed"
        );

        AppraisalOutcome {
            primary,
            corrective,
            summary,
        }
    }
}

impl Default for AppraisalEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Locates the header, reads the sheet, and filters it to the individual.
/// Any failure along the way yields an empty extraction: the category
/// contributes zero and the run continues.
fn extract_sheet(source: &dyn SheetSource, sheet: &str, target: &str) -> Extraction {
    let skip = find_header_row(source, sheet).unwrap_or(0);

    let grid = match source.rows(sheet, skip, None) {
        Ok(grid) => grid,
        Err(err) => {
            tracing::warn!(sheet, %err, "sheet unreadable, category skipped");
            return Extraction::empty();
        }
    };

    let table = SheetTable::from_grid(grid);
    match extract_for(&table, &NAME_ALIASES, target) {
        Ok(extraction) => extraction,
        Err(err) => {
            tracing::warn!(sheet, %err, "category skipped");
            Extraction::empty()
        }
    }
}
