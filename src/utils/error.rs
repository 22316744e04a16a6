use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF read error: {0}")]
    PdfReadError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV write error: {0}")]
    CsvError(#[from] csv::Error),
}
