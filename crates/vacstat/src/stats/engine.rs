use super::record::VacancyRecord;
use super::snapshot::{RegionSalaryEntry, RegionShareEntry, StatisticsSnapshot};
use std::collections::{BTreeMap, HashMap};

/// Tuning knobs for one aggregation run.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsOptions {
    /// Case-sensitive, unanchored substring matched against vacancy titles.
    /// An empty string matches nothing: the filtered series stays at zero.
    pub profession: String,
    /// Minimum vacancy share a region must reach to appear in any ranking.
    /// The boundary is inclusive: a share equal to the threshold survives.
    pub significance_threshold: f64,
    /// Maximum length of each region ranking.
    pub top_n: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            profession: String::new(),
            significance_threshold: 0.01,
            top_n: 10,
        }
    }
}

impl StatsOptions {
    pub fn for_profession(profession: impl Into<String>) -> Self {
        Self {
            profession: profession.into(),
            ..Self::default()
        }
    }
}

/// Mutable (sum, count) accumulator behind every year and region series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RunningBucket {
    total_salary: u64,
    count: u64,
}

impl RunningBucket {
    fn add(&mut self, salary: u64) {
        self.total_salary += salary;
        self.count += 1;
    }

    fn absorb(&mut self, other: RunningBucket) {
        self.total_salary += other.total_salary;
        self.count += other.count;
    }

    fn average(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            self.total_salary / self.count
        }
    }
}

/// Single-pass aggregator over a stream of [`VacancyRecord`]s.
///
/// Construct one engine per run, feed it every record through
/// [`accumulate`](Self::accumulate), then call
/// [`finalize`](Self::finalize) exactly once to obtain the snapshot.
/// Accumulation is commutative per bucket, so disjoint partial engines can
/// be combined with [`merge`](Self::merge) before the single finalize.
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    options: StatsOptions,
    years: HashMap<i32, RunningBucket>,
    years_filtered: HashMap<i32, RunningBucket>,
    regions: HashMap<String, RunningBucket>,
    // HashMap iteration order is unspecified; ranking tie-breaks are stable
    // over the order regions were first seen, so track it explicitly.
    region_order: Vec<String>,
    total_records: u64,
}

impl StatisticsEngine {
    pub fn new(options: StatsOptions) -> Self {
        Self {
            options,
            years: HashMap::new(),
            years_filtered: HashMap::new(),
            regions: HashMap::new(),
            region_order: Vec::new(),
            total_records: 0,
        }
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Folds one record into the year, filtered-year, and region buckets.
    pub fn accumulate(&mut self, record: &VacancyRecord) {
        self.total_records += 1;

        self.years.entry(record.year).or_default().add(record.salary);

        // The filtered bucket exists for every year seen, even when no title
        // matches; a zero count there is a real "no data" outcome.
        let matches = self.matches_profession(&record.title);
        let filtered = self.years_filtered.entry(record.year).or_default();
        if matches {
            filtered.add(record.salary);
        }

        if !self.regions.contains_key(&record.region) {
            self.region_order.push(record.region.clone());
        }
        self.regions
            .entry(record.region.clone())
            .or_default()
            .add(record.salary);
    }

    /// Element-wise sums another engine's buckets into this one.
    ///
    /// Intended for combining partial aggregates from disjoint shards before
    /// the single [`finalize`](Self::finalize); the significance filter is
    /// only meaningful against the merged grand total.
    pub fn merge(&mut self, other: StatisticsEngine) {
        self.total_records += other.total_records;

        for (year, bucket) in other.years {
            self.years.entry(year).or_default().absorb(bucket);
        }
        for (year, bucket) in other.years_filtered {
            self.years_filtered.entry(year).or_default().absorb(bucket);
        }
        for region in other.region_order {
            let bucket = other.regions[&region];
            if !self.regions.contains_key(&region) {
                self.region_order.push(region.clone());
            }
            self.regions.entry(region).or_default().absorb(bucket);
        }
    }

    /// One-shot transform of the accumulated buckets into the immutable
    /// snapshot. Consumes the engine; a fresh engine is required for the
    /// next run.
    pub fn finalize(self) -> StatisticsSnapshot {
        let StatisticsEngine {
            options,
            years,
            years_filtered,
            regions,
            region_order,
            total_records,
        } = self;

        let mut year_salary = BTreeMap::new();
        let mut year_count = BTreeMap::new();
        for (year, bucket) in &years {
            year_salary.insert(*year, bucket.average());
            year_count.insert(*year, bucket.count);
        }

        let mut year_salary_filtered = BTreeMap::new();
        let mut year_count_filtered = BTreeMap::new();
        for (year, bucket) in &years_filtered {
            // count 0 leaves the sentinel salary 0; division is skipped by
            // construction inside average().
            year_salary_filtered.insert(*year, bucket.average());
            year_count_filtered.insert(*year, bucket.count);
        }

        let (region_salary_top, region_share_top) = if total_records == 0 {
            (Vec::new(), Vec::new())
        } else {
            rank_regions(&options, &regions, &region_order, total_records)
        };

        StatisticsSnapshot {
            year_salary,
            year_count,
            year_salary_filtered,
            year_count_filtered,
            region_salary_top,
            region_share_top,
        }
    }

    fn matches_profession(&self, title: &str) -> bool {
        !self.options.profession.is_empty() && title.contains(&self.options.profession)
    }
}

/// Applies the significance filter in discovery order, then produces the two
/// independent top-N rankings with stable tie-breaks.
fn rank_regions(
    options: &StatsOptions,
    regions: &HashMap<String, RunningBucket>,
    region_order: &[String],
    total_records: u64,
) -> (Vec<RegionSalaryEntry>, Vec<RegionShareEntry>) {
    let mut survivors: Vec<(&String, u64, f64)> = Vec::new();
    for region in region_order {
        let bucket = &regions[region];
        let share = share_of(bucket.count, total_records);
        if share < options.significance_threshold {
            continue;
        }
        survivors.push((region, bucket.average(), share));
    }

    let mut by_salary = survivors.clone();
    by_salary.sort_by(|a, b| b.1.cmp(&a.1));
    by_salary.truncate(options.top_n);

    let mut by_share = survivors;
    by_share.sort_by(|a, b| b.2.total_cmp(&a.2));
    by_share.truncate(options.top_n);

    (
        by_salary
            .into_iter()
            .map(|(region, salary, _)| RegionSalaryEntry {
                region: region.clone(),
                salary,
            })
            .collect(),
        by_share
            .into_iter()
            .map(|(region, _, share)| RegionShareEntry {
                region: region.clone(),
                share,
            })
            .collect(),
    )
}

/// Vacancy share rounded to 4 decimal places, half away from zero.
///
/// Scaling the integer count before the division keeps the half case exact
/// for integer inputs, so `1 / 20000` rounds up to `0.0001`.
fn share_of(count: u64, total: u64) -> f64 {
    ((count * 10_000) as f64 / total as f64).round() / 10_000.0
}
