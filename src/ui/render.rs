use std::time::Duration;

use super::Theme;
use crate::report::{BenchmarkReport, LevelResult};

const COLUMN_WIDTH: usize = 8;
const TABLE_HEADERS: [&str; 6] = ["Workers", "RPS", "p50 ms", "p95 ms", "p99 ms", "Failures"];

/// What a single `run` is about to do, for the header block.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary<'plan> {
    pub target: &'plan str,
    pub entry_point: &'plan str,
    pub invocation_args: &'plan str,
    pub workers: usize,
    pub iterations: usize,
    pub timeout: Duration,
}

fn args_or_none(args: &str) -> &str {
    if args.trim().is_empty() {
        "(none)"
    } else {
        args
    }
}

fn ms(value: f64) -> String {
    format!("{:.1}", value)
}

fn rps(value: f64) -> String {
    format!("{:.2}", value)
}

#[must_use]
pub fn run_header(theme: Theme, summary: &RunSummary<'_>) -> Vec<String> {
    vec![
        String::new(),
        theme.heading(&format!("Load Test - {}", summary.target)),
        format!("  Script:  {}", summary.entry_point),
        format!("  Command: {}", args_or_none(summary.invocation_args)),
        format!(
            "  Workers: {}  Iterations: {}  Timeout: {:?}",
            summary.workers, summary.iterations, summary.timeout
        ),
        String::new(),
        theme.warn("Running..."),
    ]
}

#[must_use]
pub fn benchmark_header(
    theme: Theme,
    target: &str,
    invocation_args: &str,
    levels: &str,
    iterations: usize,
) -> Vec<String> {
    vec![
        String::new(),
        theme.heading(&format!("Benchmark - {}", target)),
        format!("  Command:    {}", args_or_none(invocation_args)),
        format!("  Levels:     {}", levels),
        format!("  Iterations: {} per level", iterations),
        String::new(),
    ]
}

/// Detail block for one level, values rounded for display.
#[must_use]
pub fn level_lines(theme: Theme, level: &LevelResult) -> Vec<String> {
    let latency = &level.latency;
    let mut lines = vec![
        format!("  Workers:      {}", level.concurrency),
        format!("  Iterations:   {}", level.iterations),
        format!("  Wall time:    {:.3}s", level.wall_time_seconds),
        format!("  Throughput:   {} req/s", rps(level.throughput_per_second)),
        format!(
            "  {}      {}",
            theme.status("Success:", level.failure_count),
            level.success_count
        ),
    ];
    if level.failure_count > 0 {
        lines.push(format!(
            "  {}     {}  (timeouts: {})",
            theme.bad("Failures:"),
            level.failure_count,
            level.timeout_count
        ));
    }
    lines.push(format!(
        "  Latency (ms): min={}  p50={}  p95={}  p99={}  max={}",
        ms(latency.min_ms),
        ms(latency.p50_ms),
        ms(latency.p95_ms),
        ms(latency.p99_ms),
        ms(latency.max_ms)
    ));
    lines
}

/// One-line status printed as each benchmark level drains.
#[must_use]
pub fn progress_line(theme: Theme, level: &LevelResult) -> String {
    format!(
        "  {} {}  p95={}ms  fail={}",
        theme.accent(&format!("[workers={}]", level.concurrency)),
        theme.status(
            &format!("{} rps", rps(level.throughput_per_second)),
            level.failure_count
        ),
        ms(level.latency.p95_ms),
        level.failure_count
    )
}

/// Side-by-side comparison of every level in `report`.
#[must_use]
pub fn comparison_table(theme: Theme, report: &BenchmarkReport) -> Vec<String> {
    let header = TABLE_HEADERS
        .iter()
        .map(|title| format!("{:>width$}", title, width = COLUMN_WIDTH))
        .collect::<Vec<_>>()
        .join("  ");
    let rule = TABLE_HEADERS
        .iter()
        .map(|_title| "-".repeat(COLUMN_WIDTH))
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = vec![
        theme.heading("Comparison Table:"),
        format!("  {}", header),
        format!("  {}", rule),
    ];
    for level in &report.levels {
        let failures = format!("{:>width$}", level.failure_count, width = COLUMN_WIDTH);
        lines.push(format!(
            "  {:>width$}  {:>width$}  {:>width$}  {:>width$}  {:>width$}  {}",
            level.concurrency,
            rps(level.throughput_per_second),
            ms(level.latency.p50_ms),
            ms(level.latency.p95_ms),
            ms(level.latency.p99_ms),
            theme.status(&failures, level.failure_count),
            width = COLUMN_WIDTH
        ));
    }
    lines
}

/// Full rendering of a stored report: header, per-level detail, then the table.
#[must_use]
pub fn report_lines(theme: Theme, report: &BenchmarkReport) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        theme.heading(&format!("Performance Report - {}", report.target)),
        format!("  Timestamp: {}", report.timestamp),
        format!("  Command:   {}", args_or_none(&report.invocation_args)),
        String::new(),
    ];
    for level in &report.levels {
        lines.push(format!(
            "  {}",
            theme.accent(&format!("[workers={}]", level.concurrency))
        ));
        lines.extend(level_lines(theme, level));
        lines.push(String::new());
    }
    if !report.levels.is_empty() {
        lines.extend(comparison_table(theme, report));
    }
    lines
}

#[must_use]
pub fn saved_line(path: &std::path::Path) -> String {
    format!("  Report saved to {}", path.display())
}
