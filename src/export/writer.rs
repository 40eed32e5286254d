// src/export/writer.rs - Write the flattened rows as one CSV artifact
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{CrawlerError, Result};
use crate::export::rows::to_rows;
use crate::models::Match;

/// Writes the whole run's rows to a single file, once, at the end. Row widths
/// vary by design (1, 2 or 10 columns), and the match separator is an
/// intentionally blank line.
pub struct CsvExporter {
    directory: PathBuf,
    filename: String,
}

impl CsvExporter {
    pub fn new(directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
        }
    }

    pub fn export(&self, matches: &[Match]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.directory)
            .map_err(|e| CrawlerError::output(self.directory.display().to_string(), e))?;
        let path = self.directory.join(&self.filename);

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&path)
            .map_err(|e| Self::output_error(&path, e))?;

        for row in to_rows(matches) {
            if row.is_empty() {
                // A record with one empty field renders as a blank line.
                writer
                    .write_record([""])
                    .map_err(|e| Self::output_error(&path, e))?;
            } else {
                writer
                    .write_record(&row)
                    .map_err(|e| Self::output_error(&path, e))?;
            }
        }
        writer.flush().map_err(|e| Self::output_error(&path, e))?;

        info!("📊 wrote {} matches to {}", matches.len(), path.display());
        Ok(path)
    }

    fn output_error(path: &Path, e: impl ToString) -> CrawlerError {
        CrawlerError::output(path.display().to_string(), e)
    }
}
