use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::domain::{FacultyRecord, ScoreSummary};

/// One persisted appraisal outcome, appended to the history log after every
/// successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub name: String,
    pub designation: String,
    pub dept: String,
    pub empid: String,
    pub research: f64,
    pub self_development: f64,
    pub mentoring: f64,
    pub academics: f64,
    pub leadership: f64,
    /// Sum of the buckets with each value truncated to an integer first.
    pub total_score: i64,
    pub weighted_total: f64,
    pub timestamp: DateTime<Local>,
}

impl HistoryRecord {
    pub fn from_summary(
        faculty: &FacultyRecord,
        summary: &ScoreSummary,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            name: faculty.name.clone(),
            designation: faculty.designation.clone(),
            dept: faculty.department.clone(),
            empid: faculty.employee_id.clone(),
            research: summary.buckets.research,
            self_development: summary.buckets.self_development,
            mentoring: summary.buckets.mentoring,
            academics: summary.buckets.academics,
            leadership: summary.buckets.leadership,
            total_score: summary.buckets.truncated_total(),
            weighted_total: summary.weighted.total,
            timestamp,
        }
    }
}

/// Storage abstraction for the appraisal history so the service can be
/// exercised in isolation. The store is append-only.
pub trait HistoryRepository: Send + Sync {
    fn append(&self, record: HistoryRecord) -> Result<(), HistoryError>;
    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history store unavailable: {0}")]
    Unavailable(String),
}
