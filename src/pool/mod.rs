//! Closed-loop execution of one batch at a fixed concurrency.
mod budget;


use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::args::PositiveUsize;
use crate::error::RunError;
use crate::invocation::{Invocation, InvocationResult};
use crate::report::LevelResult;
use crate::stats::summarize;

pub use budget::IterationBudget;

/// Upper bound on the up-front allocation for collected results.
const RESULTS_PREALLOC_LIMIT: usize = 4096;

/// Runs `iterations` invocations with at most `workers` in flight.
///
/// `min(workers, iterations)` worker tasks each claim the next iteration from
/// a shared budget as soon as their previous invocation finishes. Wall time is
/// measured from just before the first worker starts until the last result is
/// collected.
///
/// # Errors
///
/// Returns an error when a worker task dies before the batch is complete.
pub async fn run_level(
    invocation: Arc<Invocation>,
    workers: PositiveUsize,
    iterations: PositiveUsize,
) -> Result<LevelResult, RunError> {
    let total = iterations.get();
    let slots = workers.get().min(total);
    let budget = Arc::new(IterationBudget::new(total));
    // One pending send per worker; each waits for its send before starting again.
    let (results_tx, mut results_rx) = mpsc::channel::<InvocationResult>(slots);

    debug!("Starting batch: {} iterations across {} slots", total, slots);
    let start = Instant::now();
    let mut worker_handles: Vec<JoinHandle<()>> = Vec::with_capacity(slots);
    for _ in 0..slots {
        let budget = Arc::clone(&budget);
        let invocation = Arc::clone(&invocation);
        let results_tx = results_tx.clone();
        worker_handles.push(tokio::spawn(async move {
            while budget.try_reserve() {
                let result = invocation.execute().await;
                if results_tx.send(result).await.is_err() {
                    break;
                }
            }
        }));
    }
    drop(results_tx);

    let mut results = Vec::with_capacity(total.min(RESULTS_PREALLOC_LIMIT));
    while results.len() < total {
        match results_rx.recv().await {
            Some(result) => results.push(result),
            None => break,
        }
    }
    let wall_time = start.elapsed();

    let mut first_failure = None;
    for handle in worker_handles {
        if let Err(source) = handle.await {
            warn!("Worker task ended abnormally: {}", source);
            first_failure.get_or_insert(source);
        }
    }
    if results.len() < total {
        return Err(RunError::IncompleteBatch {
            expected: total,
            collected: results.len(),
        });
    }
    if let Some(source) = first_failure {
        return Err(RunError::WorkerFailed { source });
    }

    let stats = summarize(&results)?;
    Ok(LevelResult::from_batch(
        workers.get(),
        stats,
        wall_time.as_secs_f64(),
    ))
}
