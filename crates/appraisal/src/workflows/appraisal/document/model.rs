use std::path::Path;

use serde::{Deserialize, Serialize};

/// Paragraph-level text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocParagraph {
    pub text: String,
    #[serde(default)]
    pub alignment: CellAlignment,
}

impl DocParagraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: CellAlignment::default(),
        }
    }
}

/// One table cell. `span` records how many template grid columns the cell
/// covers after merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocCell {
    #[serde(default)]
    pub paragraphs: Vec<DocParagraph>,
    #[serde(default = "default_span")]
    pub span: usize,
}

fn default_span() -> usize {
    1
}

impl DocCell {
    pub fn empty() -> Self {
        Self {
            paragraphs: vec![DocParagraph::new("")],
            span: 1,
        }
    }

    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|paragraph| paragraph.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replaces the cell content with a single paragraph, keeping the first
    /// paragraph's alignment.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let alignment = self
            .paragraphs
            .first()
            .map(|paragraph| paragraph.alignment)
            .unwrap_or_default();
        self.paragraphs = vec![DocParagraph {
            text: text.into(),
            alignment,
        }];
    }

    pub fn set_alignment(&mut self, alignment: CellAlignment) {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(DocParagraph::new(""));
        }
        for paragraph in &mut self.paragraphs {
            paragraph.alignment = alignment;
        }
    }
}

impl Default for DocCell {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocRow {
    #[serde(default)]
    pub cells: Vec<DocCell>,
}

impl DocRow {
    pub fn empty(width: usize) -> Self {
        Self {
            cells: (0..width).map(|_| DocCell::empty()).collect(),
        }
    }

    /// Grid columns covered by this row, counting merged spans.
    pub fn grid_width(&self) -> usize {
        self.cells.iter().map(|cell| cell.span.max(1)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocTable {
    #[serde(default)]
    pub rows: Vec<DocRow>,
}

impl DocTable {
    pub fn with_rows(rows: usize, width: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| DocRow::empty(width)).collect(),
        }
    }

    /// The template grid width, taken from the widest existing row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(DocRow::grid_width).max().unwrap_or(0)
    }

    /// Merges `count` adjacent cells starting at `start` into one logical
    /// cell retaining the text of the first. Out-of-range requests merge as
    /// far as the row extends.
    pub fn merge_cells(&mut self, row: usize, start: usize, count: usize) {
        let Some(row) = self.rows.get_mut(row) else {
            return;
        };
        if count <= 1 || start >= row.cells.len() {
            return;
        }

        let end = (start + count).min(row.cells.len());
        let merged_span: usize = row.cells[start..end]
            .iter()
            .map(|cell| cell.span.max(1))
            .sum();
        row.cells.drain(start + 1..end);
        row.cells[start].span = merged_span;
    }
}

/// A structured report document: top-level paragraphs plus tables addressed
/// by stable integer position. Serialized as JSON; converting the populated
/// document to a distribution format happens outside this crate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportDocument {
    #[serde(default)]
    pub paragraphs: Vec<DocParagraph>,
    #[serde(default)]
    pub tables: Vec<DocTable>,
}

impl ReportDocument {
    pub fn table(&self, index: usize) -> Option<&DocTable> {
        self.tables.get(index)
    }

    pub fn table_mut(&mut self, index: usize) -> Option<&mut DocTable> {
        self.tables.get_mut(index)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(raw).map_err(|err| DocumentError::Unopenable {
            path: "<inline>".to_string(),
            reason: err.to_string(),
        })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| DocumentError::Unopenable {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|err| DocumentError::Unopenable {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let raw = serde_json::to_string_pretty(self).map_err(|err| DocumentError::Unwritable {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|err| DocumentError::Unwritable {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("template document could not be opened: {path}: {reason}")]
    Unopenable { path: String, reason: String },
    #[error("document could not be written: {path}: {reason}")]
    Unwritable { path: String, reason: String },
}
