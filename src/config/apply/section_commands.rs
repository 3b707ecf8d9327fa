use clap::ArgMatches;

use crate::args::{BenchArgs, Command};
use crate::error::AppResult;

use super::super::parse::{parse_duration_value, parse_levels_value};
use super::super::types::ConfigFile;
use super::util::{ensure_positive_usize, invalid_field, is_cli};

pub(super) fn apply_command_config(
    args: &mut BenchArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    match &mut args.command {
        Command::Run(run) => {
            if !is_cli(matches, "workers")
                && let Some(workers) = config.workers
            {
                run.workers = ensure_positive_usize(workers, "workers")?;
            }
            if !is_cli(matches, "iterations")
                && let Some(iterations) = config.iterations
            {
                run.iterations = ensure_positive_usize(iterations, "iterations")?;
            }
            if !is_cli(matches, "timeout")
                && let Some(timeout) = config.timeout.as_ref()
            {
                run.timeout = parse_duration_value(timeout).map_err(invalid_field("timeout"))?;
            }
            if !is_cli(matches, "output")
                && let Some(output) = config.output.clone()
            {
                run.output = Some(output);
            }
        }
        Command::Benchmark(bench) => {
            if !is_cli(matches, "levels")
                && let Some(levels) = config.levels.as_ref()
            {
                bench.levels = parse_levels_value(levels).map_err(invalid_field("levels"))?;
            }
            if !is_cli(matches, "iterations")
                && let Some(iterations) = config.iterations
            {
                bench.iterations = ensure_positive_usize(iterations, "iterations")?;
            }
            if !is_cli(matches, "timeout")
                && let Some(timeout) = config.timeout.as_ref()
            {
                bench.timeout = parse_duration_value(timeout).map_err(invalid_field("timeout"))?;
            }
            if !is_cli(matches, "output")
                && let Some(output) = config.output.clone()
            {
                bench.output = Some(output);
            }
        }
        Command::Report(report) => {
            if !is_cli(matches, "file")
                && let Some(output) = config.output.clone()
            {
                report.file = output;
            }
        }
    }
    Ok(())
}
