//! Faculty appraisal workflow: sheet extraction, category scoring, and
//! report-document population for one faculty member per run.

pub(crate) mod categories;
pub mod document;
pub mod domain;
pub mod engine;
pub mod grading;
pub mod layout;
pub mod repository;
pub mod router;
pub mod service;
pub mod sheet;
pub mod weights;

#[cfg(test)]
mod tests;

pub use document::{DocumentError, PlaceholderMap, ReportDocument};
pub use domain::{BucketScores, Designation, FacultyRecord, ScoreBucket, ScoreContext, ScoreSummary};
pub use engine::{AppraisalEngine, AppraisalInputs, AppraisalOutcome};
pub use repository::{HistoryError, HistoryRecord, HistoryRepository};
pub use router::{appraisal_router, AppraisalSubmission};
pub use service::{AppraisalService, AppraisalServiceError, DocumentPaths};
pub use sheet::{
    CsvDirectorySource, InMemorySheetSource, SheetError, SheetSource, XlsxSheetSource,
};
pub use weights::WeightedBreakdown;
