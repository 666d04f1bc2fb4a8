use std::collections::BTreeMap;

use super::model::ReportDocument;
use crate::workflows::appraisal::domain::{render_number, FacultyRecord, ScoreContext};

/// Literal marker-to-value substitutions for one document. Values are
/// snapshots taken when the map is built, not live references.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderMap {
    entries: BTreeMap<String, String>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, marker: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(marker.into(), value.into());
    }

    /// Replaces every occurrence of every marker present in `text`,
    /// case-sensitively. Unmatched markers are left untouched.
    pub fn apply_to_text(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (marker, value) in &self.entries {
            if result.contains(marker.as_str()) {
                result = result.replace(marker.as_str(), value);
            }
        }
        result
    }

    /// Applies the map to every top-level paragraph and every paragraph of
    /// every table cell.
    pub fn apply(&self, document: &mut ReportDocument) {
        for paragraph in &mut document.paragraphs {
            paragraph.text = self.apply_to_text(&paragraph.text);
        }
        for table in &mut document.tables {
            for row in &mut table.rows {
                for cell in &mut row.cells {
                    for paragraph in &mut cell.paragraphs {
                        paragraph.text = self.apply_to_text(&paragraph.text);
                    }
                }
            }
        }
    }
}

/// Marker map for the primary report: bucket totals plus the faculty
/// details.
pub(crate) fn primary_map(faculty: &FacultyRecord, ctx: &ScoreContext) -> PlaceholderMap {
    use crate::workflows::appraisal::domain::ScoreBucket::*;

    let mut map = PlaceholderMap::new();
    map.insert("{{research}}", render_number(ctx.bucket(Research)));
    map.insert("{{self}}", render_number(ctx.bucket(SelfDevelopment)));
    map.insert("{{mentorship}}", render_number(ctx.bucket(Mentoring)));
    map.insert("{{academics}}", render_number(ctx.bucket(Academics)));
    map.insert("{{name}}", faculty.name.clone());
    map.insert("{{designation}}", faculty.designation.clone());
    map.insert("{{dept}}", faculty.department.clone());
    map.insert("{{empid}}", faculty.employee_id.clone());
    map
}

/// Marker map for the corrective-action report: bucket totals plus every
/// counter slot, including the ones no rule feeds (they render as 0).
pub(crate) fn corrective_map(ctx: &ScoreContext) -> PlaceholderMap {
    use crate::workflows::appraisal::domain::ScoreBucket::*;

    let mut map = PlaceholderMap::new();
    map.insert("{{research}}", render_number(ctx.bucket(Research)));
    map.insert("{{selfm}}", render_number(ctx.bucket(SelfDevelopment)));
    map.insert("{{mentor}}", render_number(ctx.bucket(Mentoring)));
    map.insert("{{academics}}", render_number(ctx.bucket(Academics)));

    for i in 1..=13 {
        let slot = format!("r{i}_1");
        map.insert(format!("{{{{{slot}}}}}"), render_number(ctx.counter(&slot)));
    }
    for i in 1..=7 {
        let slot = format!("p{i}_1");
        map.insert(format!("{{{{{slot}}}}}"), render_number(ctx.counter(&slot)));
    }
    for i in 1..=5 {
        let slot = format!("s{i}_1");
        map.insert(format!("{{{{{slot}}}}}"), render_number(ctx.counter(&slot)));
    }
    map
}
