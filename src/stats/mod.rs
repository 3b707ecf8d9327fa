//! Reduction of a batch of invocation outcomes into counts and latency figures.
mod percentiles;


use serde::{Deserialize, Serialize};

use crate::error::RunError;
use crate::invocation::InvocationResult;

pub use percentiles::{percentile, sorted_seconds};

const MS_PER_SECOND: f64 = 1000.0;

/// Latency distribution of one batch, in milliseconds at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencySummary {
    pub min_ms: f64,
    pub max_ms: f64,
    pub mean_ms: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
}

/// Outcome counts plus latency for one batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStats {
    pub success_count: usize,
    pub failure_count: usize,
    pub timeout_count: usize,
    pub latency: LatencySummary,
}

impl BatchStats {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.success_count.saturating_add(self.failure_count)
    }
}

/// Summarizes a non-empty batch.
///
/// Every result contributes to latency, including failures and timeouts.
///
/// # Errors
///
/// Returns [`RunError::EmptyBatch`] when `results` is empty.
pub fn summarize(results: &[InvocationResult]) -> Result<BatchStats, RunError> {
    let durations = sorted_seconds(results.iter().map(|result| result.duration_seconds));
    let (Some(min), Some(max)) = (durations.first().copied(), durations.last().copied()) else {
        return Err(RunError::EmptyBatch);
    };

    let success_count = results.iter().filter(|result| result.succeeded).count();
    let timeout_count = results.iter().filter(|result| result.timed_out).count();
    let failure_count = results.len().saturating_sub(success_count);
    let mean = durations.iter().sum::<f64>() / durations.len() as f64;

    Ok(BatchStats {
        success_count,
        failure_count,
        timeout_count,
        latency: LatencySummary {
            min_ms: min * MS_PER_SECOND,
            max_ms: max * MS_PER_SECOND,
            mean_ms: mean * MS_PER_SECOND,
            p50_ms: percentile(&durations, 50.0) * MS_PER_SECOND,
            p95_ms: percentile(&durations, 95.0) * MS_PER_SECOND,
            p99_ms: percentile(&durations, 99.0) * MS_PER_SECOND,
        },
    })
}
