use std::path::Path;

use crate::models::OutputRow;
use crate::utils::ExtractError;

pub struct CsvExporter;

impl CsvExporter {
    /// Writes the rows with a header record; unset scalars become empty
    /// cells.
    pub fn write(rows: &[OutputRow], output_path: &Path) -> Result<(), ExtractError> {
        let mut writer = csv::Writer::from_path(output_path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
