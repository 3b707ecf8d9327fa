//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::{BenchArgs, BenchmarkArgs, Command, ReportArgs, RunArgs};
pub use defaults::{
    DEFAULT_CONFIG_FILES, DEFAULT_ITERATIONS, DEFAULT_LEVELS, DEFAULT_REPORT_PATH,
    DEFAULT_ROOT_MARKER, DEFAULT_TIMEOUT, DEFAULT_WORKERS, default_interpreters,
};
pub use parsers::{parse_duration_arg, parse_levels, split_command_line};
pub use types::{ConcurrencyLevels, PositiveUsize};
