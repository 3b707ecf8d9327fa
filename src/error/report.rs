use std::path::PathBuf;
use thiserror::Error;

use super::{EXIT_REPORT_READ, EXIT_REPORT_WRITE};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report file not found: {path}")]
    NotFound { path: PathBuf },
    #[error("Failed to read report '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Report '{path}' is not a valid benchmark report: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize report: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write report '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            ReportError::NotFound { .. } | ReportError::Read { .. } | ReportError::Parse { .. } => {
                EXIT_REPORT_READ
            }
            ReportError::Serialize { .. } | ReportError::Write { .. } => EXIT_REPORT_WRITE,
        }
    }
}
