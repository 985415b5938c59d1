use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the salary ranking: region and its integer average salary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSalaryEntry {
    pub region: String,
    pub salary: u64,
}

/// One row of the share ranking: region and its vacancy share in [0, 1],
/// rounded to 4 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionShareEntry {
    pub region: String,
    pub share: f64,
}

/// The immutable statistics artifact produced by a finished aggregation run.
///
/// Exporters receive this by value and cannot reach back into engine state.
/// Year series are keyed maps; the region rankings are ordered vectors,
/// salary-descending and share-descending respectively, each at most top-N
/// entries long. A filtered year with count 0 carries salary 0 as a "no
/// profession vacancies this year" sentinel, not a computed average.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    pub year_salary: BTreeMap<i32, u64>,
    pub year_count: BTreeMap<i32, u64>,
    pub year_salary_filtered: BTreeMap<i32, u64>,
    pub year_count_filtered: BTreeMap<i32, u64>,
    pub region_salary_top: Vec<RegionSalaryEntry>,
    pub region_share_top: Vec<RegionShareEntry>,
}

impl StatisticsSnapshot {
    pub fn is_empty(&self) -> bool {
        self.year_count.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
