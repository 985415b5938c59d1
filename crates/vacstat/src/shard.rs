use crate::stats::{StatisticsEngine, StatisticsSnapshot, StatsOptions, VacancyRecord};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::thread;

#[derive(Debug, thiserror::Error)]
pub enum ShardError {
    #[error("failed to access shard storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vacancy CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("input has no '{0}' column")]
    MissingColumn(&'static str),
}

/// Splits a raw vacancy export into one CSV file per publication year,
/// preserving the raw column layout. Returns the shard paths in year order.
///
/// Rows whose `published_at` lacks a 4-digit year prefix are dropped, the
/// same rows the importer would reject later anyway.
pub fn split_by_year<P, Q>(input: P, out_dir: Q) -> Result<Vec<PathBuf>, ShardError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(input.as_ref())?;

    let headers = reader.headers()?.clone();
    let published_at = headers
        .iter()
        .position(|column| column == "published_at")
        .ok_or(ShardError::MissingColumn("published_at"))?;

    let mut shards: BTreeMap<i32, Vec<csv::StringRecord>> = BTreeMap::new();
    for row in reader.records() {
        let row = row?;
        let year = row
            .get(published_at)
            .and_then(|value| value.get(..4))
            .and_then(|prefix| prefix.parse::<i32>().ok());
        if let Some(year) = year {
            shards.entry(year).or_default().push(row);
        }
    }

    std::fs::create_dir_all(out_dir.as_ref())?;
    let mut paths = Vec::with_capacity(shards.len());
    for (year, rows) in shards {
        let path = out_dir.as_ref().join(format!("year_{year}.csv"));
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(&headers)?;
        for row in rows {
            writer.write_record(&row)?;
        }
        writer.flush()?;
        paths.push(path);
    }

    Ok(paths)
}

/// Fan-out execution strategy over the same aggregation primitive: partition
/// the records into disjoint year shards, run one engine per shard on scoped
/// worker threads, merge the partial sums, and finalize once.
///
/// The significance filter only runs inside the final, post-merge finalize;
/// per-shard shares would be meaningless. The result equals a sequential
/// single-engine pass over the same records.
pub fn aggregate_parallel(
    records: &[VacancyRecord],
    options: &StatsOptions,
    workers: usize,
) -> StatisticsSnapshot {
    if workers <= 1 || records.is_empty() {
        return aggregate(records, options);
    }

    let mut shards: BTreeMap<i32, Vec<&VacancyRecord>> = BTreeMap::new();
    for record in records {
        shards.entry(record.year).or_default().push(record);
    }

    // Round-robin the year shards across a fixed number of workers so the
    // assignment is deterministic for a given input.
    let mut groups: Vec<Vec<&VacancyRecord>> = vec![Vec::new(); workers.min(shards.len())];
    let group_count = groups.len();
    for (slot, shard) in shards.into_values().enumerate() {
        groups[slot % group_count].extend(shard);
    }

    let mut merged = StatisticsEngine::new(options.clone());
    thread::scope(|scope| {
        let handles: Vec<_> = groups
            .iter()
            .map(|group| {
                scope.spawn(move || {
                    let mut engine = StatisticsEngine::new(options.clone());
                    for record in group.iter().copied() {
                        engine.accumulate(record);
                    }
                    engine
                })
            })
            .collect();

        for handle in handles {
            // A worker panic carries its payload back to the coordinator.
            match handle.join() {
                Ok(engine) => merged.merge(engine),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });

    merged.finalize()
}

/// Sequential single-pass aggregation over an in-memory record slice.
pub fn aggregate(records: &[VacancyRecord], options: &StatsOptions) -> StatisticsSnapshot {
    let mut engine = StatisticsEngine::new(options.clone());
    for record in records {
        engine.accumulate(record);
    }
    engine.finalize()
}
