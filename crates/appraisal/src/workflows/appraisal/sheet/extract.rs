use crate::workflows::appraisal::domain::safe_float;

/// Column labels accepted for the grouping (faculty name) column, tried in
/// order. The first label present in the sheet wins.
pub(crate) const NAME_ALIASES: [&str; 5] = [
    "Faculty Name",
    "Faculty name",
    "Name of the Faculty",
    "Name",
    "Faculty",
];

#[derive(Debug, thiserror::Error)]
pub(crate) enum ExtractError {
    #[error("no recognised name column among the sheet's headers")]
    ColumnUnresolved,
}

/// One sheet decoded into trimmed headers plus raw data rows.
#[derive(Debug, Clone)]
pub(crate) struct SheetTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// The first grid row becomes the header row; labels are trimmed the way
    /// the alias set expects.
    pub(crate) fn from_grid(mut grid: Vec<Vec<String>>) -> Self {
        if grid.is_empty() {
            return Self {
                headers: Vec::new(),
                rows: Vec::new(),
            };
        }
        let headers = grid.remove(0).iter().map(|h| h.trim().to_string()).collect();
        Self {
            headers,
            rows: grid,
        }
    }

    /// Resolves the first alias present among the column labels. Resolved
    /// once per sheet; callers hold on to the index.
    pub(crate) fn resolve_column(&self, aliases: &[&str]) -> Option<usize> {
        aliases
            .iter()
            .find_map(|alias| self.headers.iter().position(|header| header == alias))
    }

    /// Propagates the nearest preceding non-blank value of `column` downward
    /// into blank cells. Idempotent.
    pub(crate) fn forward_fill(&mut self, column: usize) {
        let mut carried: Option<String> = None;
        for row in &mut self.rows {
            match row.get(column) {
                Some(value) if !value.trim().is_empty() => {
                    carried = Some(value.clone());
                }
                _ => {
                    if let Some(fill) = &carried {
                        if let Some(cell) = row.get_mut(column) {
                            *cell = fill.clone();
                        } else {
                            row.resize(column + 1, String::new());
                            row[column] = fill.clone();
                        }
                    }
                }
            }
        }
    }
}

/// Forward-fills the grouping column and keeps the rows whose trimmed value
/// equals `target` exactly, preserving order.
pub(crate) fn extract_for(
    table: &SheetTable,
    aliases: &[&str],
    target: &str,
) -> Result<Extraction, ExtractError> {
    let column = table
        .resolve_column(aliases)
        .ok_or(ExtractError::ColumnUnresolved)?;

    let mut filled = table.clone();
    filled.forward_fill(column);

    let rows = filled
        .rows
        .into_iter()
        .filter(|row| {
            row.get(column)
                .map(|value| value.trim() == target)
                .unwrap_or(false)
        })
        .collect();

    Ok(Extraction {
        headers: filled.headers,
        rows,
    })
}

/// Rows of one sheet filtered down to a single individual.
#[derive(Debug, Clone)]
pub(crate) struct Extraction {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Extraction {
    pub(crate) fn empty() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().map(|cells| RowView {
            headers: &self.headers,
            cells,
        })
    }
}

/// Field-level access to one extracted row. All category rules read through
/// `text_or` so missing and blank values default uniformly.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowView<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> RowView<'a> {
    fn raw(&self, field: &str) -> Option<&'a str> {
        let index = self.headers.iter().position(|header| header == field)?;
        self.cells.get(index).map(String::as_str)
    }

    /// The field's text, or `default` when the column is absent or blank.
    pub(crate) fn text_or(&self, field: &str, default: &str) -> String {
        match self.raw(field) {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => default.to_string(),
        }
    }

    /// Amount-style numeric read: absent, blank, or unparseable is 0.
    pub(crate) fn number(&self, field: &str) -> f64 {
        self.raw(field).map(safe_float).unwrap_or(0.0)
    }

    /// Strict numeric read for fields whose absence disables a bonus rather
    /// than contributing zero.
    pub(crate) fn number_opt(&self, field: &str) -> Option<f64> {
        self.raw(field)?.trim().parse::<f64>().ok()
    }
}
