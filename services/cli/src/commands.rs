use crate::cli::{ReportArgs, ShardArgs, StatArgs};
use tracing::info;
use vacstat::config::AppConfig;
use vacstat::error::AppError;
use vacstat::ingest::VacancyImporter;
use vacstat::report;
use vacstat::shard;
use vacstat::stats::{StatisticsSnapshot, StatsOptions};

pub(crate) fn run_stat(config: &AppConfig, args: StatArgs) -> Result<(), AppError> {
    let options = merge_options(
        config,
        args.profession.clone(),
        args.threshold,
        args.top_n,
    );
    let snapshot = aggregate(config, &args.input, &options, args.parallel, args.workers)?;

    if args.json {
        let json = snapshot.to_json()?;
        println!("{json}");
    } else {
        print!("{}", report::render_snapshot(&snapshot, &options.profession));
    }

    Ok(())
}

pub(crate) fn run_report(config: &AppConfig, args: ReportArgs) -> Result<(), AppError> {
    let options = merge_options(
        config,
        args.profession.clone(),
        args.threshold,
        args.top_n,
    );
    let snapshot = aggregate(config, &args.input, &options, args.parallel, args.workers)?;

    let written = report::write_reports(&snapshot, &args.out_dir)?;
    for path in &written {
        println!("wrote {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_shard(args: ShardArgs) -> Result<(), AppError> {
    let paths = shard::split_by_year(&args.input, &args.out_dir)?;
    info!(shards = paths.len(), "split export by year");
    for path in &paths {
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn aggregate(
    config: &AppConfig,
    input: &std::path::Path,
    options: &StatsOptions,
    parallel: bool,
    workers: Option<usize>,
) -> Result<StatisticsSnapshot, AppError> {
    let records = VacancyImporter::from_path(input)?;
    info!(records = records.len(), "loaded vacancy export");

    let snapshot = if parallel {
        let workers = workers.unwrap_or(config.workers).max(1);
        shard::aggregate_parallel(&records, options, workers)
    } else {
        shard::aggregate(&records, options)
    };

    Ok(snapshot)
}

fn merge_options(
    config: &AppConfig,
    profession: Option<String>,
    threshold: Option<f64>,
    top_n: Option<usize>,
) -> StatsOptions {
    let mut options = config.stats_options();
    if let Some(profession) = profession {
        options.profession = profession;
    }
    if let Some(threshold) = threshold {
        options.significance_threshold = threshold;
    }
    if let Some(top_n) = top_n {
        options.top_n = top_n;
    }
    options
}
