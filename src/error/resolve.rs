use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Target '{name}' not found.")]
    NotFound { name: String },
    #[error("No runnable entry point found in '{dir}'.")]
    NoEntryPoint { dir: PathBuf },
    #[error("Failed to scan '{path}': {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
