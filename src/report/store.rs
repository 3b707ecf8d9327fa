use std::path::{Path, PathBuf};

use tracing::debug;

use super::BenchmarkReport;
use crate::error::ReportError;

/// Reads and writes [`BenchmarkReport`] JSON files.
#[derive(Debug, Clone)]
pub struct ReportStore {
    default_path: PathBuf,
}

impl ReportStore {
    #[must_use]
    pub fn new(default_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
        }
    }

    /// Writes `report` as pretty JSON, replacing any existing file.
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or any filesystem step fails.
    pub async fn write(
        &self,
        report: &BenchmarkReport,
        path: Option<&Path>,
    ) -> Result<PathBuf, ReportError> {
        let path = path.unwrap_or(self.default_path.as_path()).to_path_buf();
        let mut json = serde_json::to_vec_pretty(report)
            .map_err(|source| ReportError::Serialize { source })?;
        json.push(b'\n');

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ReportError::Write {
                    path: path.clone(),
                    source,
                })?;
        }
        tokio::fs::write(&path, json)
            .await
            .map_err(|source| ReportError::Write {
                path: path.clone(),
                source,
            })?;
        debug!("Wrote report with {} levels to {}", report.levels.len(), path.display());
        Ok(path)
    }

    /// Loads a previously written report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NotFound`] when the file is absent and
    /// [`ReportError::Parse`] when it is not a valid report.
    pub async fn read(&self, path: Option<&Path>) -> Result<BenchmarkReport, ReportError> {
        let path = path.unwrap_or(self.default_path.as_path()).to_path_buf();
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ReportError::NotFound { path });
            }
            Err(source) => return Err(ReportError::Read { path, source }),
        };
        serde_json::from_slice(&bytes).map_err(|source| ReportError::Parse { path, source })
    }
}
