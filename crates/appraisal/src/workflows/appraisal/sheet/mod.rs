//! Tabular-source plumbing: workbook adapters, header-row location, and
//! per-individual row extraction.

pub(crate) mod extract;
pub(crate) mod locator;
mod source;

pub use source::{CsvDirectorySource, InMemorySheetSource, SheetError, SheetSource, XlsxSheetSource};

pub(crate) use extract::{extract_for, ExtractError, Extraction, RowView, SheetTable, NAME_ALIASES};
pub(crate) use locator::find_header_row;
