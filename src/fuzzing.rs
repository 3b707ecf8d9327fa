use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{
    BenchArgs, ConcurrencyLevels, parse_duration_arg, parse_levels, split_command_line,
};
use crate::config::types::{ConfigFile, DurationValue};
use crate::config::{apply_config, parse_duration_value};
use crate::error::{AppError, AppResult, ConfigError, ReportError};
use crate::report::BenchmarkReport;

const BASE_ARGV: [&str; 4] = ["procbench", "benchmark", "--target", "fuzz"];

thread_local! {
    static BASE_MATCHES: Option<ArgMatches> =
        BenchArgs::command().try_get_matches_from(BASE_ARGV).ok();
}

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_arg_input(input: &str) -> AppResult<Duration> {
    parse_duration_arg(input)
}

/// Parses a config duration given as text.
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_value_input(input: &str) -> AppResult<Duration> {
    Ok(parse_duration_value(&DurationValue::Text(input.to_owned()))?)
}

/// Parses a comma-separated concurrency level list.
///
/// # Errors
///
/// Returns an error when the list is empty or holds a non-positive entry.
pub fn parse_levels_input(input: &str) -> AppResult<ConcurrencyLevels> {
    Ok(parse_levels(input)?)
}

/// Splits a `--cmd` string into arguments.
///
/// # Errors
///
/// Returns an error on unbalanced quotes or a trailing escape.
pub fn split_command_line_input(input: &str) -> AppResult<Vec<String>> {
    Ok(split_command_line(input)?)
}

/// Decodes a report document.
///
/// # Errors
///
/// Returns an error when the bytes are not a valid report.
pub fn parse_report_input(input: &[u8]) -> AppResult<BenchmarkReport> {
    serde_json::from_slice(input).map_err(|source| {
        AppError::report(ReportError::Parse {
            path: "fuzz.json".into(),
            source,
        })
    })
}

/// Parses TOML config and applies it to default benchmark arguments.
///
/// # Errors
///
/// Returns an error when parsing or applying fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<()> {
    let config: ConfigFile = toml::from_str(input).map_err(|err| {
        AppError::config(ConfigError::ParseToml {
            path: "fuzz.toml".into(),
            source: err,
        })
    })?;
    apply_to_base(&config)
}

/// Parses JSON config and applies it to default benchmark arguments.
///
/// # Errors
///
/// Returns an error when parsing or applying fails.
pub fn apply_config_from_json(input: &[u8]) -> AppResult<()> {
    let config: ConfigFile = serde_json::from_slice(input).map_err(|err| {
        AppError::config(ConfigError::ParseJson {
            path: "fuzz.json".into(),
            source: err,
        })
    })?;
    apply_to_base(&config)
}

fn apply_to_base(config: &ConfigFile) -> AppResult<()> {
    BASE_MATCHES.with(|matches| {
        let Some(matches) = matches else {
            return Ok(());
        };
        let mut args = BenchArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, config)
    })
}
