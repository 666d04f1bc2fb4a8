use crate::infra::{InMemoryHistory, JsonFileHistory};
use appraisal::config::AppConfig;
use appraisal::error::AppError;
use appraisal::workflows::appraisal::layout;
use appraisal::workflows::appraisal::{
    AppraisalEngine, AppraisalInputs, AppraisalService, CsvDirectorySource, DocumentPaths,
    FacultyRecord, HistoryRecord, HistoryRepository, InMemorySheetSource, SheetSource,
    XlsxSheetSource,
};
use clap::Args;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

fn io_error(message: String) -> AppError {
    AppError::Io(io::Error::new(io::ErrorKind::Other, message))
}

#[derive(Args, Debug)]
pub(crate) struct AppraiseArgs {
    /// Activity workbook: an .xlsx file or a directory of per-sheet CSVs
    #[arg(long)]
    pub(crate) workbook: PathBuf,
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) designation: String,
    #[arg(long)]
    pub(crate) department: String,
    #[arg(long)]
    pub(crate) employee_id: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Pretty-print the resulting score summary
    #[arg(long)]
    pub(crate) pretty: bool,
}

/// Runs one appraisal against the configured templates and history file.
pub(crate) fn run_appraise(args: AppraiseArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let source: Box<dyn SheetSource> = if args.workbook.is_dir() {
        Box::new(CsvDirectorySource::new(&args.workbook))
    } else {
        Box::new(XlsxSheetSource::open(&args.workbook).map_err(|err| io_error(err.to_string()))?)
    };

    let faculty = FacultyRecord {
        name: args.name,
        designation: args.designation,
        department: args.department,
        employee_id: args.employee_id,
    };

    let history = Arc::new(JsonFileHistory::new(config.history_path.clone()));
    let service = AppraisalService::new(history, DocumentPaths::from(&config.documents));
    let summary = service.appraise(&faculty, source.as_ref())?;

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string())
    );
    Ok(())
}

/// Scores an embedded sample workbook against the standard template layout
/// and prints the summary. No files are read or written.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let faculty = FacultyRecord {
        name: "Dr. Demo Faculty".to_string(),
        designation: "Associate Professor".to_string(),
        department: "Computer Science".to_string(),
        employee_id: "DEMO-1".to_string(),
    };

    let engine = AppraisalEngine::new();
    let outcome = engine.run(AppraisalInputs {
        faculty: &faculty,
        source: &sample_workbook(&faculty.name),
        primary_template: layout::standard_template(),
        corrective_template: layout::standard_corrective_template(),
        academics_source: None,
    });

    // The demo keeps history in memory so repeated runs stay side-effect
    // free.
    let history = InMemoryHistory::default();
    let record = HistoryRecord::from_summary(&faculty, &outcome.summary, chrono::Local::now());
    history
        .append(record)
        .map_err(|err| io_error(err.to_string()))?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&outcome.summary)
    } else {
        serde_json::to_string(&outcome.summary)
    };
    println!("{}", rendered.unwrap_or_else(|_| "{}".to_string()));
    Ok(())
}

fn sample_workbook(name: &str) -> InMemorySheetSource {
    let grid = |rows: &[&[&str]]| -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    };

    InMemorySheetSource::new()
        .with_sheet(
            "Journal Publication",
            grid(&[
                &[
                    "Faculty Name",
                    "Paper Title",
                    "Journal Name",
                    "Year of Publication",
                    "ISSN",
                    "Web Link",
                    "Impact Factor",
                ],
                &[name, "Sample Paper", "Sample Journal", "2024", "0000-0000", "-", "2.1"],
            ]),
        )
        .with_sheet(
            "Conferences",
            grid(&[
                &[
                    "Faculty Name",
                    "Paper Title",
                    "Organized By",
                    "From Date",
                    "Place",
                    "Role",
                    "Conference Type",
                ],
                &[name, "Sample Talk", "IEEE", "2024-05-01", "Delhi", "Speaker", "International"],
            ]),
        )
        .with_sheet(
            "Workshop",
            grid(&[
                &[
                    "Faculty Name",
                    "Topic",
                    "From Date",
                    "To Date",
                    "Description",
                    "Venue",
                    "Role",
                ],
                &[name, "Sample Workshop", "2024-06-01", "2024-06-02", "-", "Hall A", "Attended"],
            ]),
        )
}
