use std::path::Path;

use crate::utils::ExtractError;

pub struct PdfTextReader;

impl PdfTextReader {
    /// Linearizes a PDF into one line sequence across all pages, in reading
    /// order. Page boundaries are not marked.
    pub fn read_lines(path: &Path) -> Result<Vec<String>, ExtractError> {
        let text = pdf_extract::extract_text(path)
            .map_err(|e| ExtractError::PdfReadError(format!("{}: {}", path.display(), e)))?;
        Ok(text.lines().map(str::to_string).collect())
    }
}
