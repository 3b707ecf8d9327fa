mod bench;
mod commands;

pub use bench::BenchArgs;
pub use commands::{BenchmarkArgs, Command, ReportArgs, RunArgs};
