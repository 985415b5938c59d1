mod engine;
mod record;
mod snapshot;

pub use engine::{StatisticsEngine, StatsOptions};
pub use record::VacancyRecord;
pub use snapshot::{RegionSalaryEntry, RegionShareEntry, StatisticsSnapshot};
