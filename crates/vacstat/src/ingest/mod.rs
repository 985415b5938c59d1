mod currency;
mod parser;

use crate::stats::VacancyRecord;
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum VacancyImportError {
    #[error("failed to read vacancy export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vacancy CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Turns a raw vacancy export (`name, salary_from, salary_to,
/// salary_currency, area_name, published_at`) into normalized records ready
/// for the statistics engine.
pub struct VacancyImporter;

impl VacancyImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<VacancyRecord>, VacancyImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<VacancyRecord>, VacancyImportError> {
        let parsed = parser::parse_records(reader)?;
        if parsed.skipped > 0 {
            warn!(
                skipped = parsed.skipped,
                kept = parsed.records.len(),
                "skipped malformed vacancy rows"
            );
        }
        Ok(parsed.records)
    }
}
