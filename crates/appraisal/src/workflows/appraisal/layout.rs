//! Fixed positions inside the report templates.
//!
//! The destination tables are addressed by position, so these constants must
//! match the shipped template documents. `standard_template` builds a
//! template with exactly this layout for the demo, fixtures, and anyone who
//! does not carry their own template file.

use super::document::{DocTable, ReportDocument};

/// First detail row inside every category table; rows 0 and 1 are the
/// template's heading rows.
pub const DETAIL_START_ROW: usize = 2;

/// Table positions in the primary report template.
pub mod tables {
    /// Structural academics table copied from the scores source document.
    pub const ACADEMICS: usize = 1;
    pub const JOURNALS: usize = 3;
    pub const BOOKS: usize = 4;
    pub const CONFERENCES_INTERNATIONAL: usize = 6;
    pub const CONFERENCES_OTHER: usize = 7;
    pub const GRANT_APPLICATIONS: usize = 8;
    pub const SEMINARS: usize = 9;
    pub const PATENTS: usize = 10;
    pub const WORKSHOPS_ATTENDED: usize = 14;
    pub const FACULTY_INTERNSHIPS: usize = 15;
    pub const MOOC_COURSES: usize = 16;
    pub const MOU: usize = 17;
    pub const WORKSHOPS_CONDUCTED: usize = 19;
    pub const GUEST_LECTURES: usize = 20;
    pub const MENTORING: usize = 22;

    /// Total number of tables in the standard primary template.
    pub const COUNT: usize = 23;
}

/// Positions in the corrective-action report's weighted score table.
pub mod weight_table {
    pub const TABLE: usize = 2;
    pub const SCORES_ROW: usize = 2;
    pub const WEIGHTS_ROW: usize = 3;
    pub const PRODUCTS_ROW: usize = 4;
    /// Bucket values occupy columns 1..=5; column 0 is the row label.
    pub const FIRST_VALUE_COL: usize = 1;
}

/// Grid width of each category table (detail columns plus the totals
/// column).
fn table_width(index: usize) -> usize {
    match index {
        tables::ACADEMICS => 10,
        tables::JOURNALS => 7,
        tables::BOOKS => 6,
        tables::CONFERENCES_INTERNATIONAL | tables::CONFERENCES_OTHER => 6,
        tables::GRANT_APPLICATIONS | tables::SEMINARS => 7,
        tables::PATENTS => 5,
        tables::WORKSHOPS_ATTENDED | tables::FACULTY_INTERNSHIPS => 5,
        tables::MOOC_COURSES | tables::MOU => 6,
        tables::WORKSHOPS_CONDUCTED | tables::GUEST_LECTURES => 7,
        tables::MENTORING => 7,
        _ => 4,
    }
}

/// Builds an empty primary report template matching the standard layout:
/// every category table present at its declared position with two heading
/// rows.
pub fn standard_template() -> ReportDocument {
    let tables = (0..tables::COUNT)
        .map(|index| DocTable::with_rows(DETAIL_START_ROW, table_width(index)))
        .collect();

    ReportDocument {
        paragraphs: Vec::new(),
        tables,
    }
}

/// Builds an empty corrective-action template: the weighted score table at
/// its declared position with a label column, five value columns, and a
/// final total column.
pub fn standard_corrective_template() -> ReportDocument {
    let tables = (0..=weight_table::TABLE)
        .map(|index| {
            if index == weight_table::TABLE {
                DocTable::with_rows(weight_table::PRODUCTS_ROW + 1, 7)
            } else {
                DocTable::with_rows(DETAIL_START_ROW, 4)
            }
        })
        .collect();

    ReportDocument {
        paragraphs: Vec::new(),
        tables,
    }
}
