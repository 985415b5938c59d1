use crate::stats::StatsOptions;
use std::env;
use std::fmt;

/// Top-level configuration, loaded from the environment with sensible
/// defaults. CLI flags layer overrides on top of this.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub profession: String,
    pub significance_threshold: f64,
    pub top_n: usize,
    pub workers: usize,
    pub telemetry: TelemetryConfig,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let profession = env::var("VACSTAT_PROFESSION").unwrap_or_default();

        let significance_threshold = env::var("VACSTAT_THRESHOLD")
            .unwrap_or_else(|_| "0.01".to_string())
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidThreshold)?;
        if !(0.0..=1.0).contains(&significance_threshold) {
            return Err(ConfigError::InvalidThreshold);
        }

        let top_n = env::var("VACSTAT_TOP_N")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidTopN)?;

        let workers = env::var("VACSTAT_WORKERS")
            .unwrap_or_else(|_| "4".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidWorkers)?;
        if workers == 0 {
            return Err(ConfigError::InvalidWorkers);
        }

        let log_level = env::var("VACSTAT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            profession,
            significance_threshold,
            top_n,
            workers,
            telemetry: TelemetryConfig { log_level },
        })
    }

    pub fn stats_options(&self) -> StatsOptions {
        StatsOptions {
            profession: self.profession.clone(),
            significance_threshold: self.significance_threshold,
            top_n: self.top_n,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidThreshold,
    InvalidTopN,
    InvalidWorkers,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold => {
                write!(f, "VACSTAT_THRESHOLD must be a fraction between 0 and 1")
            }
            ConfigError::InvalidTopN => write!(f, "VACSTAT_TOP_N must be a non-negative integer"),
            ConfigError::InvalidWorkers => write!(f, "VACSTAT_WORKERS must be a positive integer"),
        }
    }
}

impl std::error::Error for ConfigError {}
