use std::fs;
use vacstat::report::write_reports;
use vacstat::stats::{StatisticsEngine, StatsOptions, VacancyRecord};

fn worked_example_snapshot() -> vacstat::stats::StatisticsSnapshot {
    let mut engine = StatisticsEngine::new(StatsOptions::for_profession("Dev"));
    engine.accumulate(&VacancyRecord::new("Dev", 1000, "Oslo", 2020));
    engine.accumulate(&VacancyRecord::new("Dev", 2000, "Oslo", 2020));
    engine.accumulate(&VacancyRecord::new("QA", 3000, "Bergen", 2021));
    engine.finalize()
}

#[test]
fn write_reports_emits_the_three_expected_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let written =
        write_reports(&worked_example_snapshot(), dir.path()).expect("reports write");

    let names: Vec<String> = written
        .iter()
        .map(|path| {
            path.file_name()
                .expect("report file name")
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert_eq!(
        names,
        [
            "report_years.csv",
            "report_region_salary.csv",
            "report_region_share.csv"
        ]
    );
    assert!(written.iter().all(|path| path.exists()));
}

#[test]
fn year_report_zero_fills_the_filtered_columns() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_reports(&worked_example_snapshot(), dir.path()).expect("reports write");

    let years = fs::read_to_string(dir.path().join("report_years.csv")).expect("years file");
    let lines: Vec<&str> = years.lines().collect();
    assert_eq!(
        lines,
        [
            "year,average_salary,average_salary_profession,vacancy_count,vacancy_count_profession",
            "2020,1500,1500,2,2",
            // 2021 has no profession matches: sentinel zeros, not blanks.
            "2021,3000,0,1,0",
        ]
    );
}

#[test]
fn region_reports_keep_ranking_order_and_share_precision() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_reports(&worked_example_snapshot(), dir.path()).expect("reports write");

    let salary =
        fs::read_to_string(dir.path().join("report_region_salary.csv")).expect("salary file");
    assert_eq!(
        salary.lines().collect::<Vec<&str>>(),
        ["region,average_salary", "Bergen,3000", "Oslo,1500"]
    );

    let share =
        fs::read_to_string(dir.path().join("report_region_share.csv")).expect("share file");
    assert_eq!(
        share.lines().collect::<Vec<&str>>(),
        ["region,share", "Oslo,0.6667", "Bergen,0.3333"]
    );
}

#[test]
fn empty_snapshot_writes_headers_only() {
    let dir = tempfile::tempdir().expect("temp dir");
    let snapshot = StatisticsEngine::new(StatsOptions::default()).finalize();
    write_reports(&snapshot, dir.path()).expect("reports write");

    let years = fs::read_to_string(dir.path().join("report_years.csv")).expect("years file");
    assert_eq!(
        years.lines().collect::<Vec<&str>>(),
        ["year,average_salary,average_salary_profession,vacancy_count,vacancy_count_profession"]
    );
}
