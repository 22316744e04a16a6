use crate::models::{OutputRow, COLUMNS};

const STATEMENT_COLUMN: usize = 1;

/// In-memory tabular view over extracted rows: column enumeration,
/// substring filtering by row visibility, and export of the visible
/// statements for the clipboard.
pub struct DataSet {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    hidden: Vec<bool>,
}

impl DataSet {
    pub fn from_rows(rows: &[OutputRow]) -> Self {
        DataSet {
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(OutputRow::cells).collect(),
            hidden: vec![false; rows.len()],
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_row_hidden(&self, row: usize) -> bool {
        self.hidden.get(row).copied().unwrap_or(true)
    }

    /// Hides every row whose cell in the named column does not contain the
    /// needle. An empty needle shows everything. Unknown columns leave
    /// visibility untouched.
    pub fn filter(&mut self, column: &str, needle: &str) {
        let Some(index) = self.columns.iter().position(|c| c == column) else {
            return;
        };
        for (row, hidden) in self.rows.iter().zip(self.hidden.iter_mut()) {
            *hidden = !row[index].contains(needle);
        }
    }

    /// Newline-joined statement cells of the visible rows.
    pub fn visible_statements(&self) -> String {
        self.rows
            .iter()
            .zip(self.hidden.iter())
            .filter(|(_, &hidden)| !hidden)
            .map(|(row, _)| row[STATEMENT_COLUMN].as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
