use std::fs;
use vacstat::ingest::VacancyImporter;
use vacstat::shard::{aggregate, aggregate_parallel, split_by_year};
use vacstat::stats::{StatsOptions, VacancyRecord};

fn record(title: &str, salary: u64, region: &str, year: i32) -> VacancyRecord {
    VacancyRecord::new(title, salary, region, year)
}

fn sample_records() -> Vec<VacancyRecord> {
    let mut records = Vec::new();
    let regions = ["Москва", "Санкт-Петербург", "Екатеринбург", "Казань"];
    for year in 2018..=2022 {
        for (index, region) in regions.iter().enumerate() {
            for copy in 0..(index as u64 + 2) {
                records.push(record(
                    if copy % 2 == 0 { "Аналитик" } else { "Инженер" },
                    10_000 + 1_000 * (year as u64 - 2018) + 137 * copy + 11 * index as u64,
                    region,
                    year,
                ));
            }
        }
    }
    records
}

#[test]
fn parallel_fan_out_matches_the_sequential_pass() {
    let records = sample_records();
    let options = StatsOptions::for_profession("Аналитик");

    let sequential = aggregate(&records, &options);
    for workers in [2, 3, 8] {
        let parallel = aggregate_parallel(&records, &options, workers);
        assert_eq!(parallel, sequential, "workers={workers}");
    }
}

#[test]
fn single_worker_degrades_to_the_sequential_pass() {
    let records = sample_records();
    let options = StatsOptions::default();
    assert_eq!(
        aggregate_parallel(&records, &options, 1),
        aggregate(&records, &options)
    );
}

#[test]
fn share_filter_applies_only_after_the_global_merge() {
    // "Рязань" has a single record in one year shard. Within that shard it
    // would be 100% of the records; globally it is 1 of 50, share 0.02,
    // which must survive the 1% threshold after the merge.
    let mut records = vec![record("Аналитик", 7000, "Рязань", 2018)];
    for index in 0..49u64 {
        records.push(record(
            "Инженер",
            5000 + index,
            "Москва",
            2019 + (index % 4) as i32,
        ));
    }

    let snapshot = aggregate_parallel(&records, &StatsOptions::default(), 4);
    assert!(snapshot
        .region_share_top
        .iter()
        .any(|entry| entry.region == "Рязань" && entry.share == 0.02));
}

#[test]
fn empty_record_set_aggregates_to_an_empty_snapshot() {
    let snapshot = aggregate_parallel(&[], &StatsOptions::default(), 4);
    assert!(snapshot.is_empty());
}

#[test]
fn split_by_year_writes_one_shard_per_year() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("export.csv");
    fs::write(
        &input,
        "\
name,salary_from,salary_to,salary_currency,area_name,published_at
Аналитик,30000.0,50000.0,RUR,Москва,2020-03-10T12:00:00+0300
Инженер,25000.0,35000.0,RUR,Казань,2021-02-15T10:30:00+0300
Аналитик,20000.0,30000.0,RUR,Москва,2020-08-01T08:00:00+0300
Без даты,20000.0,30000.0,RUR,Москва,someday
",
    )
    .expect("write export");

    let shards_dir = dir.path().join("shards");
    let paths = split_by_year(&input, &shards_dir).expect("split succeeds");

    let names: Vec<String> = paths
        .iter()
        .map(|path| {
            path.file_name()
                .expect("shard file name")
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert_eq!(names, ["year_2020.csv", "year_2021.csv"]);

    // Each shard keeps the raw layout, so the importer can read it directly.
    let year_2020 = VacancyImporter::from_path(&paths[0]).expect("shard imports");
    assert_eq!(year_2020.len(), 2);
    assert!(year_2020.iter().all(|record| record.year == 2020));
}

#[test]
fn split_rejects_exports_without_a_published_at_column() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("broken.csv");
    fs::write(&input, "name,salary\nАналитик,100\n").expect("write export");

    let result = split_by_year(&input, dir.path().join("shards"));
    assert!(matches!(
        result,
        Err(vacstat::shard::ShardError::MissingColumn("published_at"))
    ));
}
