use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::FacultyRecord;
use super::repository::HistoryRepository;
use super::service::AppraisalService;
use super::sheet::{CsvDirectorySource, InMemorySheetSource, SheetSource, XlsxSheetSource};

/// Router builder exposing the appraisal submission and history endpoints.
pub fn appraisal_router<H>(service: Arc<AppraisalService<H>>) -> Router
where
    H: HistoryRepository + 'static,
{
    Router::new()
        .route("/api/v1/appraisals", post(submit_handler::<H>))
        .route("/api/v1/appraisals/history", get(history_handler::<H>))
        .with_state(service)
}

/// Appraisal request: faculty details plus either inline CSV sheets or a
/// server-side workbook path (an `.xlsx` file or a directory of CSVs).
#[derive(Debug, Deserialize)]
pub struct AppraisalSubmission {
    pub name: String,
    pub designation: String,
    pub department: String,
    pub employee_id: String,
    #[serde(default)]
    pub workbook_path: Option<String>,
    #[serde(default)]
    pub sheets: Option<BTreeMap<String, String>>,
}

impl AppraisalSubmission {
    fn faculty(&self) -> FacultyRecord {
        FacultyRecord {
            name: self.name.clone(),
            designation: self.designation.clone(),
            department: self.department.clone(),
            employee_id: self.employee_id.clone(),
        }
    }

    fn details_complete(&self) -> bool {
        ![
            &self.name,
            &self.designation,
            &self.department,
            &self.employee_id,
        ]
        .iter()
        .any(|field| field.trim().is_empty())
    }
}

pub(crate) async fn submit_handler<H>(
    State(service): State<Arc<AppraisalService<H>>>,
    axum::Json(submission): axum::Json<AppraisalSubmission>,
) -> Response
where
    H: HistoryRepository + 'static,
{
    if !submission.details_complete() {
        let payload = json!({ "error": "please fill in all faculty details" });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    }

    let source: Box<dyn SheetSource> = if let Some(sheets) = &submission.sheets {
        match InMemorySheetSource::from_csv_sheets(sheets) {
            Ok(source) => Box::new(source),
            Err(err) => {
                let payload = json!({ "error": err.to_string() });
                return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
            }
        }
    } else if let Some(path) = &submission.workbook_path {
        match source_for_path(path) {
            Ok(source) => source,
            Err(message) => {
                let payload = json!({ "error": message });
                return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
            }
        }
    } else {
        let payload = json!({ "error": "either sheets or workbook_path is required" });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    };

    let faculty = submission.faculty();
    match service.appraise(&faculty, source.as_ref()) {
        Ok(summary) => {
            let payload = json!({ "success": true, "summary": summary });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn history_handler<H>(
    State(service): State<Arc<AppraisalService<H>>>,
) -> Response
where
    H: HistoryRepository + 'static,
{
    match service.history() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn source_for_path(raw: &str) -> Result<Box<dyn SheetSource>, String> {
    let path = Path::new(raw);
    if path.is_dir() {
        return Ok(Box::new(CsvDirectorySource::new(path)));
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("xlsx") | Some("xls") | Some("xlsm") => XlsxSheetSource::open(path)
            .map(|source| Box::new(source) as Box<dyn SheetSource>)
            .map_err(|err| err.to_string()),
        _ => Err(format!("unsupported workbook path: {raw}")),
    }
}
