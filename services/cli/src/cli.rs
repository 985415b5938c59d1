use crate::commands::{run_report, run_shard, run_stat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vacstat::config::AppConfig;
use vacstat::error::AppError;
use vacstat::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "vacstat",
    about = "Aggregate job-vacancy exports into salary and share statistics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate an export and print the statistics to the console
    Stat(StatArgs),
    /// Aggregate an export and write CSV report files
    Report(ReportArgs),
    /// Split an export into per-year shard files
    Shard(ShardArgs),
}

#[derive(Args, Debug)]
pub(crate) struct StatArgs {
    /// Vacancy CSV export to aggregate
    pub(crate) input: PathBuf,
    /// Profession substring for the filtered series (overrides VACSTAT_PROFESSION)
    #[arg(long)]
    pub(crate) profession: Option<String>,
    /// Significance threshold as a fraction (overrides VACSTAT_THRESHOLD)
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
    /// Ranking length (overrides VACSTAT_TOP_N)
    #[arg(long)]
    pub(crate) top_n: Option<usize>,
    /// Aggregate year shards on worker threads instead of a single pass
    #[arg(long)]
    pub(crate) parallel: bool,
    /// Worker thread count for --parallel (overrides VACSTAT_WORKERS)
    #[arg(long)]
    pub(crate) workers: Option<usize>,
    /// Emit the snapshot as JSON instead of console tables
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Vacancy CSV export to aggregate
    pub(crate) input: PathBuf,
    /// Directory for the generated report files
    #[arg(long, default_value = "reports")]
    pub(crate) out_dir: PathBuf,
    /// Profession substring for the filtered series (overrides VACSTAT_PROFESSION)
    #[arg(long)]
    pub(crate) profession: Option<String>,
    /// Significance threshold as a fraction (overrides VACSTAT_THRESHOLD)
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
    /// Ranking length (overrides VACSTAT_TOP_N)
    #[arg(long)]
    pub(crate) top_n: Option<usize>,
    /// Aggregate year shards on worker threads instead of a single pass
    #[arg(long)]
    pub(crate) parallel: bool,
    /// Worker thread count for --parallel (overrides VACSTAT_WORKERS)
    #[arg(long)]
    pub(crate) workers: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct ShardArgs {
    /// Vacancy CSV export to split
    pub(crate) input: PathBuf,
    /// Directory for the per-year shard files
    #[arg(long, default_value = "shards")]
    pub(crate) out_dir: PathBuf,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Stat(args) => run_stat(&config, args),
        Command::Report(args) => run_report(&config, args),
        Command::Shard(args) => run_shard(args),
    }
}
