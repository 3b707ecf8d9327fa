mod app;
mod config;
mod report;
mod resolve;
mod run;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use report::ReportError;
pub use resolve::ResolveError;
pub use run::RunError;
pub use validation::ValidationError;

/// Process exit status for usage, validation, and configuration failures.
pub const EXIT_USAGE: u8 = 2;
/// Process exit status when the target cannot be resolved to an executable.
pub const EXIT_RESOLVE: u8 = 3;
/// Process exit status when a report file is missing or unreadable.
pub const EXIT_REPORT_READ: u8 = 4;
/// Process exit status when a report file cannot be written.
pub const EXIT_REPORT_WRITE: u8 = 5;
/// Process exit status for any other failure.
pub const EXIT_FAILURE: u8 = 1;
