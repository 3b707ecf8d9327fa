use super::{
    apply_config, load_config_file, parse_duration_value, parse_levels_value,
    types::{ConfigFile, DurationValue, LevelsValue},
};
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use std::time::Duration;
use tempfile::tempdir;

use crate::args::{BenchArgs, Command, default_interpreters};

fn parse_with_matches(argv: &[&str]) -> Result<(BenchArgs, ArgMatches), String> {
    let matches = BenchArgs::command()
        .try_get_matches_from(argv)
        .map_err(|err| format!("parse failed: {}", err))?;
    let args = BenchArgs::from_arg_matches(&matches)
        .map_err(|err| format!("from matches failed: {}", err))?;
    Ok((args, matches))
}

fn levels_of(args: &BenchArgs) -> Result<Vec<usize>, String> {
    match &args.command {
        Command::Benchmark(bench) => Ok(bench.levels.as_slice().iter().map(|l| l.get()).collect()),
        Command::Run(_) | Command::Report(_) => Err("Expected benchmark subcommand".to_owned()),
    }
}

#[test]
fn parse_toml_config_with_levels_and_interpreters() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("procbench.toml");
    let content = r#"
skills_root = "/srv/skills"
timeout = "5s"
workers = 3
iterations = 12
levels = [1, 2, 8]
output = "reports/latest.json"

[interpreters]
py = "python3.12"
rb = "ruby"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.skills_root.as_deref() != Some("/srv/skills") {
        return Err("Unexpected skills_root".to_owned());
    }
    if config.workers != Some(3) || config.iterations != Some(12) {
        return Err("Unexpected workers/iterations".to_owned());
    }
    match config.levels {
        Some(LevelsValue::List(ref levels)) if levels == &[1, 2, 8] => {}
        other => return Err(format!("Unexpected levels: {:?}", other)),
    }
    let timeout = config
        .timeout
        .as_ref()
        .ok_or_else(|| "Expected timeout".to_owned())?;
    if parse_duration_value(timeout).map_err(|err| err.to_string())? != Duration::from_secs(5) {
        return Err("Unexpected timeout".to_owned());
    }
    let interpreters = config
        .interpreters
        .ok_or_else(|| "Expected interpreters".to_owned())?;
    if interpreters.get("rb").map(String::as_str) != Some("ruby") {
        return Err("Expected rb interpreter".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config_with_level_string_and_numeric_timeout() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("procbench.json");
    let content = r#"{ "levels": "4,1,4", "timeout": 12, "concurrency": 6 }"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    let levels = config
        .levels
        .as_ref()
        .ok_or_else(|| "Expected levels".to_owned())?;
    let parsed = parse_levels_value(levels).map_err(|err| err.to_string())?;
    let parsed: Vec<usize> = parsed.as_slice().iter().map(|l| l.get()).collect();
    if parsed != [4, 1, 4] {
        return Err(format!("Unexpected levels: {:?}", parsed));
    }
    if !matches!(config.timeout, Some(DurationValue::Seconds(12))) {
        return Err("Expected numeric timeout".to_owned());
    }
    if config.workers != Some(6) {
        return Err("Expected concurrency alias to set workers".to_owned());
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("procbench.yaml");
    std::fs::write(&path, "workers: 2").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&path).is_ok() {
        return Err("Expected yaml config to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn apply_config_fills_unset_values_and_keeps_cli_values() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&[
        "procbench",
        "benchmark",
        "--target",
        "calendar",
        "--iterations",
        "9",
    ])?;
    args.interpreters = default_interpreters();
    let config = ConfigFile {
        skills_root: Some("/opt/skills".to_owned()),
        iterations: Some(50),
        levels: Some(LevelsValue::Text("2,3".to_owned())),
        timeout: Some(DurationValue::Text("1500ms".to_owned())),
        output: Some("bench.json".to_owned()),
        interpreters: Some([(".PY".to_owned(), "pypy3".to_owned())].into_iter().collect()),
        ..ConfigFile::default()
    };

    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.skills_root.as_deref() != Some("/opt/skills") {
        return Err("Expected skills_root from config".to_owned());
    }
    if levels_of(&args)? != [2, 3] {
        return Err("Expected levels from config".to_owned());
    }
    let Command::Benchmark(bench) = &args.command else {
        return Err("Expected benchmark subcommand".to_owned());
    };
    if bench.iterations.get() != 9 {
        return Err("CLI iterations must win over config".to_owned());
    }
    if bench.timeout != Duration::from_millis(1500) {
        return Err("Expected timeout from config".to_owned());
    }
    if bench.output.as_deref() != Some("bench.json") {
        return Err("Expected output from config".to_owned());
    }
    if args.interpreters.get("py").map(String::as_str) != Some("pypy3") {
        return Err("Expected normalized interpreter override".to_owned());
    }
    if args.interpreters.get("sh").map(String::as_str) != Some("sh") {
        return Err("Expected default interpreters to survive".to_owned());
    }
    Ok(())
}

#[test]
fn apply_config_sets_report_file_from_output() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["procbench", "report"])?;
    let config = ConfigFile {
        output: Some("nightly.json".to_owned()),
        ..ConfigFile::default()
    };
    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;
    match &args.command {
        Command::Report(report) if report.file == "nightly.json" => Ok(()),
        Command::Report(report) => Err(format!("Unexpected report file {}", report.file)),
        Command::Run(_) | Command::Benchmark(_) => Err("Expected report subcommand".to_owned()),
    }
}

#[test]
fn apply_config_rejects_zero_workers() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["procbench", "run", "--target", "x"])?;
    let config = ConfigFile {
        workers: Some(0),
        ..ConfigFile::default()
    };
    if apply_config(&mut args, &matches, &config).is_ok() {
        return Err("Expected zero workers to be rejected".to_owned());
    }
    Ok(())
}
