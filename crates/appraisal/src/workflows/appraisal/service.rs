use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;

use super::document::{DocumentError, ReportDocument};
use super::domain::{FacultyRecord, ScoreSummary};
use super::engine::{AppraisalEngine, AppraisalInputs};
use super::repository::{HistoryError, HistoryRecord, HistoryRepository};
use super::sheet::SheetSource;
use crate::config::DocumentConfig;

/// Document locations the service reads templates from and writes populated
/// reports to.
#[derive(Debug, Clone)]
pub struct DocumentPaths {
    pub primary_template: PathBuf,
    pub corrective_template: PathBuf,
    pub academics_source: Option<PathBuf>,
    pub primary_output: PathBuf,
    pub corrective_output: PathBuf,
}

impl From<&DocumentConfig> for DocumentPaths {
    fn from(config: &DocumentConfig) -> Self {
        Self {
            primary_template: config.primary_template.clone(),
            corrective_template: config.corrective_template.clone(),
            academics_source: config.academics_source.clone(),
            primary_output: config.primary_output(),
            corrective_output: config.corrective_output(),
        }
    }
}

/// Service composing the engine, the template files, and the history store.
pub struct AppraisalService<H> {
    engine: AppraisalEngine,
    history: Arc<H>,
    paths: DocumentPaths,
}

impl<H> AppraisalService<H>
where
    H: HistoryRepository + 'static,
{
    pub fn new(history: Arc<H>, paths: DocumentPaths) -> Self {
        Self {
            engine: AppraisalEngine::new(),
            history,
            paths,
        }
    }

    /// Runs one appraisal end to end: load templates, score, write the
    /// populated documents, and append a history record. Only a missing
    /// primary template aborts; the corrective template falls back to a
    /// fresh copy of the primary one.
    pub fn appraise(
        &self,
        faculty: &FacultyRecord,
        source: &dyn SheetSource,
    ) -> Result<ScoreSummary, AppraisalServiceError> {
        let primary_template = ReportDocument::from_json_file(&self.paths.primary_template)?;

        let corrective_template =
            match ReportDocument::from_json_file(&self.paths.corrective_template) {
                Ok(document) => document,
                Err(err) => {
                    tracing::warn!(%err, "corrective template unavailable, using primary template copy");
                    primary_template.clone()
                }
            };

        let academics_source = self.paths.academics_source.as_ref().and_then(|path| {
            match ReportDocument::from_json_file(path) {
                Ok(document) => Some(document),
                Err(err) => {
                    tracing::warn!(%err, "scores document unavailable, academics skipped");
                    None
                }
            }
        });

        let outcome = self.engine.run(AppraisalInputs {
            faculty,
            source,
            primary_template,
            corrective_template,
            academics_source,
        });

        outcome.primary.save_json(&self.paths.primary_output)?;
        outcome.corrective.save_json(&self.paths.corrective_output)?;

        let record = HistoryRecord::from_summary(faculty, &outcome.summary, Local::now());
        self.history.append(record)?;

        Ok(outcome.summary)
    }

    pub fn history(&self) -> Result<Vec<HistoryRecord>, AppraisalServiceError> {
        Ok(self.history.list()?)
    }

    pub fn paths(&self) -> &DocumentPaths {
        &self.paths
    }
}

/// Error raised by the appraisal service.
#[derive(Debug, thiserror::Error)]
pub enum AppraisalServiceError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    History(#[from] HistoryError),
}
