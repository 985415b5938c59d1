use crate::stats::StatisticsSnapshot;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes the snapshot as three CSV report files under `out_dir`:
/// `report_years.csv`, `report_region_salary.csv`,
/// `report_region_share.csv`. Returns the paths written.
pub fn write_reports<P: AsRef<Path>>(
    snapshot: &StatisticsSnapshot,
    out_dir: P,
) -> Result<Vec<PathBuf>, ReportError> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir)?;

    let years_path = out_dir.join("report_years.csv");
    write_year_series(snapshot, &years_path)?;

    let salary_path = out_dir.join("report_region_salary.csv");
    let mut writer = csv::Writer::from_path(&salary_path)?;
    writer.write_record(["region", "average_salary"])?;
    for entry in &snapshot.region_salary_top {
        writer.write_record([entry.region.as_str(), &entry.salary.to_string()])?;
    }
    writer.flush()?;

    let share_path = out_dir.join("report_region_share.csv");
    let mut writer = csv::Writer::from_path(&share_path)?;
    writer.write_record(["region", "share"])?;
    for entry in &snapshot.region_share_top {
        writer.write_record([entry.region.as_str(), &format!("{:.4}", entry.share)])?;
    }
    writer.flush()?;

    Ok(vec![years_path, salary_path, share_path])
}

fn write_year_series(snapshot: &StatisticsSnapshot, path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "year",
        "average_salary",
        "average_salary_profession",
        "vacancy_count",
        "vacancy_count_profession",
    ])?;
    for (year, salary) in &snapshot.year_salary {
        let filtered_salary = snapshot
            .year_salary_filtered
            .get(year)
            .copied()
            .unwrap_or(0);
        let count = snapshot.year_count.get(year).copied().unwrap_or(0);
        let filtered_count = snapshot
            .year_count_filtered
            .get(year)
            .copied()
            .unwrap_or(0);
        writer.write_record([
            year.to_string(),
            salary.to_string(),
            filtered_salary.to_string(),
            count.to_string(),
            filtered_count.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
