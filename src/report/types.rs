use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::{BatchStats, LatencySummary};

/// Measurements for one concurrency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelResult {
    pub concurrency: usize,
    pub iterations: usize,
    pub wall_time_seconds: f64,
    pub throughput_per_second: f64,
    pub success_count: usize,
    pub failure_count: usize,
    pub timeout_count: usize,
    pub latency: LatencySummary,
}

impl LevelResult {
    /// Combines batch statistics with the level's timing.
    ///
    /// A zero wall time yields zero throughput instead of infinity.
    #[must_use]
    pub fn from_batch(concurrency: usize, stats: BatchStats, wall_time_seconds: f64) -> Self {
        let iterations = stats.total();
        let throughput_per_second = if wall_time_seconds > 0.0 {
            iterations as f64 / wall_time_seconds
        } else {
            0.0
        };
        Self {
            concurrency,
            iterations,
            wall_time_seconds,
            throughput_per_second,
            success_count: stats.success_count,
            failure_count: stats.failure_count,
            timeout_count: stats.timeout_count,
            latency: stats.latency,
        }
    }
}

/// A full sweep: what was run, when, and one entry per requested level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReport {
    pub target: String,
    pub invocation_args: String,
    pub timestamp: String,
    #[serde(rename = "results")]
    pub levels: Vec<LevelResult>,
}

impl BenchmarkReport {
    #[must_use]
    pub fn new(target: impl Into<String>, invocation_args: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            invocation_args: invocation_args.into(),
            timestamp: report_timestamp(Utc::now()),
            levels: Vec::new(),
        }
    }
}

/// RFC3339 in UTC with millisecond precision, e.g. `2026-01-01T00:00:00.000Z`.
#[must_use]
pub fn report_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
