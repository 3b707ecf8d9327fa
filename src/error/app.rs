use thiserror::Error;

use super::{
    ConfigError, EXIT_FAILURE, EXIT_RESOLVE, EXIT_USAGE, ReportError, ResolveError, RunError,
    ValidationError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),
    #[error("Run error: {0}")]
    Run(#[from] RunError),
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn resolve<E>(error: E) -> Self
    where
        E: Into<ResolveError>,
    {
        error.into().into()
    }

    pub fn report<E>(error: E) -> Self
    where
        E: Into<ReportError>,
    {
        error.into().into()
    }

    /// Maps the error to the process exit status reported by the CLI.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            AppError::Clap { .. } | AppError::Validation(_) | AppError::Config(_) => EXIT_USAGE,
            AppError::Resolve(_) => EXIT_RESOLVE,
            AppError::Report(err) => err.exit_code(),
            AppError::Io { .. } | AppError::Run(_) => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EXIT_REPORT_READ, EXIT_REPORT_WRITE};
    use std::path::PathBuf;

    #[test]
    fn exit_codes_distinguish_resolution_and_report_failures() -> Result<(), String> {
        let resolve = AppError::resolve(ResolveError::NotFound {
            name: "missing".to_owned(),
        });
        let read = AppError::report(ReportError::NotFound {
            path: PathBuf::from("perf_report.json"),
        });
        let write = AppError::report(ReportError::Write {
            path: PathBuf::from("/nope/perf_report.json"),
            source: std::io::Error::other("denied"),
        });
        let usage = AppError::validation(ValidationError::LevelsEmpty);

        let codes = [
            resolve.exit_code(),
            read.exit_code(),
            write.exit_code(),
            usage.exit_code(),
        ];
        if codes != [EXIT_RESOLVE, EXIT_REPORT_READ, EXIT_REPORT_WRITE, EXIT_USAGE] {
            return Err(format!("Unexpected exit codes: {:?}", codes));
        }
        if codes.contains(&0) {
            return Err("Failure exit codes must be non-zero".to_owned());
        }
        Ok(())
    }
}
