use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Interrupted.")]
    Interrupted,
    #[error("Cannot summarize an empty batch.")]
    EmptyBatch,
    #[error("Batch incomplete: expected {expected} results, collected {collected}.")]
    IncompleteBatch { expected: usize, collected: usize },
    #[error("Worker task failed: {source}")]
    WorkerFailed {
        #[source]
        source: tokio::task::JoinError,
    },
}
