use clap::{Args, Subcommand};
use std::time::Duration;

use super::super::defaults::{
    DEFAULT_ITERATIONS, DEFAULT_LEVELS, DEFAULT_REPORT_PATH, DEFAULT_TIMEOUT, DEFAULT_WORKERS,
};
use super::super::parsers::{parse_duration_arg, parse_levels, parse_positive_usize};
use super::super::types::{ConcurrencyLevels, PositiveUsize};

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run a load test at a single concurrency level
    Run(RunArgs),
    /// Sweep several concurrency levels and compare them
    Benchmark(BenchmarkArgs),
    /// Display a saved report
    Report(ReportArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Target name (resolved in the skills tree) or path to an executable
    #[arg(long, alias = "skill")]
    pub target: String,

    /// Arguments passed to the target, split shell-style
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub cmd: String,

    /// Parallel worker count
    #[arg(long, short = 'w', default_value = DEFAULT_WORKERS, value_parser = parse_positive_usize)]
    pub workers: PositiveUsize,

    /// Total iterations
    #[arg(
        long,
        short = 'n',
        default_value = DEFAULT_ITERATIONS,
        value_parser = parse_positive_usize
    )]
    pub iterations: PositiveUsize,

    /// Per-invocation timeout (supports ms/s/m/h)
    #[arg(long, default_value = DEFAULT_TIMEOUT, value_parser = parse_duration_arg)]
    pub timeout: Duration,

    /// Save report to this file (defaults to perf_report.json)
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct BenchmarkArgs {
    /// Target name (resolved in the skills tree) or path to an executable
    #[arg(long, alias = "skill")]
    pub target: String,

    /// Arguments passed to the target, split shell-style
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub cmd: String,

    /// Comma-separated worker counts, run in the given order
    #[arg(long, short = 'l', default_value = DEFAULT_LEVELS, value_parser = parse_levels)]
    pub levels: ConcurrencyLevels,

    /// Iterations per level
    #[arg(
        long,
        short = 'n',
        default_value = DEFAULT_ITERATIONS,
        value_parser = parse_positive_usize
    )]
    pub iterations: PositiveUsize,

    /// Per-invocation timeout (supports ms/s/m/h)
    #[arg(long, default_value = DEFAULT_TIMEOUT, value_parser = parse_duration_arg)]
    pub timeout: Duration,

    /// Save report to this file (defaults to perf_report.json)
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    /// Report file to display
    #[arg(long, short = 'f', default_value = DEFAULT_REPORT_PATH)]
    pub file: String,
}
