use serde::{Deserialize, Serialize};

/// A single normalized vacancy row: title, salary already converted to the
/// base currency, region, and 4-digit publication year.
///
/// Records are built once by the ingestion layer and never mutated; the
/// engine folds them into running sums and drops them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub title: String,
    pub salary: u64,
    pub region: String,
    pub year: i32,
}

impl VacancyRecord {
    pub fn new(
        title: impl Into<String>,
        salary: u64,
        region: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            salary,
            region: region.into(),
            year,
        }
    }
}
