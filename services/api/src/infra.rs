use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use appraisal::workflows::appraisal::{
    DocumentPaths, HistoryError, HistoryRecord, HistoryRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) documents: Arc<DocumentPaths>,
    pub(crate) static_dir: Arc<PathBuf>,
}

/// Append-only JSON-file history. The file is guarded by a mutex so
/// concurrent submissions serialize their read-modify-write cycles.
pub(crate) struct JsonFileHistory {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileHistory {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// A missing or malformed history file reads as an empty log rather than
    /// an error.
    fn load(&self) -> Vec<HistoryRecord> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(%err, "history file malformed, starting fresh");
                Vec::new()
            }),
            Err(_) => Vec::new(),
        }
    }
}

impl HistoryRepository for JsonFileHistory {
    fn append(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| HistoryError::Unavailable("history lock poisoned".to_string()))?;

        let mut records = self.load();
        records.push(record);
        let raw = serde_json::to_string_pretty(&records)
            .map_err(|err| HistoryError::Unavailable(err.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|err| HistoryError::Unavailable(err.to_string()))
    }

    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| HistoryError::Unavailable("history lock poisoned".to_string()))?;
        Ok(self.load())
    }
}

/// History store for the CLI demo and tests.
#[derive(Default)]
pub(crate) struct InMemoryHistory {
    records: Mutex<Vec<HistoryRecord>>,
}

impl HistoryRepository for InMemoryHistory {
    fn append(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        self.records
            .lock()
            .map_err(|_| HistoryError::Unavailable("history lock poisoned".to_string()))?
            .push(record);
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        Ok(self
            .records
            .lock()
            .map_err(|_| HistoryError::Unavailable("history lock poisoned".to_string()))?
            .clone())
    }
}
