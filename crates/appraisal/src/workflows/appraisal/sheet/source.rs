use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, DataType, Reader};

/// Failure reading the tabular source. Every variant is recoverable at the
/// category level: the affected category contributes zero.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("workbook could not be opened: {0}")]
    Workbook(String),
    #[error("sheet '{sheet}' could not be read: {reason}")]
    Unreadable { sheet: String, reason: String },
    #[error("sheet '{0}' is not present in the source")]
    MissingSheet(String),
}

/// A multi-sheet tabular source. Cells are surfaced as strings; blank cells
/// are empty strings. Implementations must keep row order stable.
pub trait SheetSource {
    fn sheet_names(&self) -> Vec<String>;

    /// Raw cell grid for `sheet`, with `skip` leading rows dropped and at
    /// most `limit` rows returned.
    fn rows(
        &self,
        sheet: &str,
        skip: usize,
        limit: Option<usize>,
    ) -> Result<Vec<Vec<String>>, SheetError>;

    fn has_sheet(&self, sheet: &str) -> bool {
        self.sheet_names().iter().any(|name| name == sheet)
    }
}

fn apply_window(
    rows: impl Iterator<Item = Vec<String>>,
    skip: usize,
    limit: Option<usize>,
) -> Vec<Vec<String>> {
    let windowed = rows.skip(skip);
    match limit {
        Some(limit) => windowed.take(limit).collect(),
        None => windowed.collect(),
    }
}

/// Fixture-friendly source holding sheets directly in memory. Used by tests,
/// the CLI demo, and inline-CSV submissions.
#[derive(Debug, Default, Clone)]
pub struct InMemorySheetSource {
    sheets: BTreeMap<String, Vec<Vec<String>>>,
}

impl InMemorySheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet<S: Into<String>>(mut self, name: S, rows: Vec<Vec<String>>) -> Self {
        self.sheets.insert(name.into(), rows);
        self
    }

    /// Builds a source from one CSV body per sheet name, as submitted inline
    /// over the API.
    pub fn from_csv_sheets(sheets: &BTreeMap<String, String>) -> Result<Self, SheetError> {
        let mut source = Self::new();
        for (name, body) in sheets {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(body.as_bytes());
            let mut rows = Vec::new();
            for record in reader.records() {
                let record = record.map_err(|err| SheetError::Unreadable {
                    sheet: name.clone(),
                    reason: err.to_string(),
                })?;
                rows.push(record.iter().map(str::to_string).collect());
            }
            source.sheets.insert(name.clone(), rows);
        }
        Ok(source)
    }
}

impl SheetSource for InMemorySheetSource {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    fn rows(
        &self,
        sheet: &str,
        skip: usize,
        limit: Option<usize>,
    ) -> Result<Vec<Vec<String>>, SheetError> {
        let rows = self
            .sheets
            .get(sheet)
            .ok_or_else(|| SheetError::MissingSheet(sheet.to_string()))?;
        Ok(apply_window(rows.iter().cloned(), skip, limit))
    }
}

/// XLSX workbook adapter backed by calamine. The workbook is reopened per
/// read; uploads are small and the reads are batch-oriented.
#[derive(Debug, Clone)]
pub struct XlsxSheetSource {
    path: PathBuf,
}

impl XlsxSheetSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let path = path.as_ref().to_path_buf();
        // Fail fast on an unopenable workbook instead of at first read.
        open_workbook_auto(&path).map_err(|err| SheetError::Workbook(err.to_string()))?;
        Ok(Self { path })
    }
}

impl SheetSource for XlsxSheetSource {
    fn sheet_names(&self) -> Vec<String> {
        match open_workbook_auto(&self.path) {
            Ok(workbook) => workbook.sheet_names().to_vec(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "workbook unreadable");
                Vec::new()
            }
        }
    }

    fn rows(
        &self,
        sheet: &str,
        skip: usize,
        limit: Option<usize>,
    ) -> Result<Vec<Vec<String>>, SheetError> {
        let mut workbook =
            open_workbook_auto(&self.path).map_err(|err| SheetError::Workbook(err.to_string()))?;
        let range = workbook
            .worksheet_range(sheet)
            .map_err(|err| SheetError::Unreadable {
                sheet: sheet.to_string(),
                reason: err.to_string(),
            })?;
        let rows = range.rows().map(|row| {
            row.iter()
                .map(|cell| cell.as_string().unwrap_or_default())
                .collect()
        });
        Ok(apply_window(rows, skip, limit))
    }
}

/// Directory-of-CSVs adapter: each `<Sheet Name>.csv` file is one sheet.
#[derive(Debug, Clone)]
pub struct CsvDirectorySource {
    dir: PathBuf,
}

impl CsvDirectorySource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.dir.join(format!("{sheet}.csv"))
    }
}

impl SheetSource for CsvDirectorySource {
    fn sheet_names(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            tracing::warn!(dir = %self.dir.display(), "sheet directory unreadable");
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();
        names.sort();
        names
    }

    fn rows(
        &self,
        sheet: &str,
        skip: usize,
        limit: Option<usize>,
    ) -> Result<Vec<Vec<String>>, SheetError> {
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Err(SheetError::MissingSheet(sheet.to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .map_err(|err| SheetError::Unreadable {
                sheet: sheet.to_string(),
                reason: err.to_string(),
            })?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| SheetError::Unreadable {
                sheet: sheet.to_string(),
                reason: err.to_string(),
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(apply_window(rows.into_iter(), skip, limit))
    }
}
