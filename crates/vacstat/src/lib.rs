pub mod config;
pub mod error;
pub mod ingest;
pub mod report;
pub mod shard;
pub mod stats;
pub mod telemetry;
