#![cfg(unix)]

mod support;

use serde_json::Value;

use support::{Workspace, describe};

fn field<'doc>(value: &'doc Value, pointer: &str) -> Result<&'doc Value, String> {
    value
        .pointer(pointer)
        .ok_or_else(|| format!("Missing {} in {}", pointer, value))
}

fn as_u64(value: &Value, pointer: &str) -> Result<u64, String> {
    field(value, pointer)?
        .as_u64()
        .ok_or_else(|| format!("{} is not an integer", pointer))
}

#[test]
fn e2e_run_writes_single_level_report() -> Result<(), String> {
    let workspace = Workspace::with_mock_skill()?;
    let output = workspace.run([
        "run",
        "--target",
        "mock",
        "--workers",
        "2",
        "--iterations",
        "4",
        "--timeout",
        "5s",
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["Load Test - mock", "mock.sh", "Latency (ms):", "Report saved to"] {
        if !stdout.contains(needle) {
            return Err(format!("Missing {:?}\n{}", needle, describe(&output)));
        }
    }

    let report = workspace.read_report("perf_report.json")?;
    if field(&report, "/target")?.as_str() != Some("mock") {
        return Err(format!("Unexpected target in {}", report));
    }
    let levels = field(&report, "/results")?
        .as_array()
        .ok_or_else(|| "results is not an array".to_owned())?;
    if levels.len() != 1 {
        return Err(format!("Expected one level, got {}", levels.len()));
    }
    if as_u64(&report, "/results/0/concurrency")? != 2
        || as_u64(&report, "/results/0/iterations")? != 4
        || as_u64(&report, "/results/0/successCount")? != 4
    {
        return Err(format!("Unexpected level {}", report));
    }
    Ok(())
}

#[test]
fn e2e_benchmark_then_report() -> Result<(), String> {
    let workspace = Workspace::with_mock_skill()?;
    let output = workspace.run([
        "benchmark",
        "--target",
        "mock",
        "--levels",
        "1,3",
        "--iterations",
        "3",
        "--output",
        "out/bench.json",
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["[workers=1]", "[workers=3]", "Comparison Table:"] {
        if !stdout.contains(needle) {
            return Err(format!("Missing {:?}\n{}", needle, describe(&output)));
        }
    }

    let report = workspace.read_report("out/bench.json")?;
    if as_u64(&report, "/results/0/concurrency")? != 1
        || as_u64(&report, "/results/1/concurrency")? != 3
    {
        return Err(format!("Levels out of order in {}", report));
    }

    let shown = workspace.run(["report", "--file", "out/bench.json"])?;
    if !shown.status.success() {
        return Err(describe(&shown));
    }
    let rendered = String::from_utf8_lossy(&shown.stdout);
    if !rendered.contains("Performance Report - mock") || !rendered.contains("p95 ms") {
        return Err(describe(&shown));
    }
    Ok(())
}

#[test]
fn e2e_failures_and_timeouts_are_counted() -> Result<(), String> {
    let workspace = Workspace::with_mock_skill()?;
    let failing = workspace.run([
        "run", "--target", "mock", "--cmd", "fail", "-w", "2", "-n", "4",
    ])?;
    if !failing.status.success() {
        return Err(describe(&failing));
    }
    let report = workspace.read_report("perf_report.json")?;
    if as_u64(&report, "/results/0/failureCount")? != 4
        || as_u64(&report, "/results/0/timeoutCount")? != 0
    {
        return Err(format!("Unexpected failure counts {}", report));
    }

    let slow = workspace.run([
        "run",
        "--target",
        "mock",
        "--cmd",
        "slow",
        "-w",
        "3",
        "-n",
        "3",
        "--timeout",
        "200ms",
    ])?;
    if !slow.status.success() {
        return Err(describe(&slow));
    }
    let report = workspace.read_report("perf_report.json")?;
    if as_u64(&report, "/results/0/timeoutCount")? != 3 {
        return Err(format!("Expected three timeouts {}", report));
    }
    Ok(())
}

#[test]
fn e2e_config_file_supplies_defaults() -> Result<(), String> {
    let workspace = Workspace::with_mock_skill()?;
    std::fs::write(
        workspace.path().join("procbench.toml"),
        "iterations = 2\nworkers = 2\noutput = \"from-config.json\"\n",
    )
    .map_err(|err| format!("write config failed: {}", err))?;

    let output = workspace.run(["run", "--target", "mock"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let report = workspace.read_report("from-config.json")?;
    if as_u64(&report, "/results/0/iterations")? != 2 {
        return Err(format!("Config iterations ignored: {}", report));
    }
    Ok(())
}

#[test]
fn e2e_exit_codes_distinguish_failures() -> Result<(), String> {
    let workspace = Workspace::with_mock_skill()?;

    let missing_target = workspace.run(["run", "--target", "nope", "-n", "1"])?;
    if missing_target.status.code() != Some(3) {
        return Err(describe(&missing_target));
    }
    // support sets PROCBENCH_LOG=error; the message must not depend on the filter.
    let stderr = String::from_utf8_lossy(&missing_target.stderr);
    if !stderr.contains("Error:") || !stderr.contains("nope") {
        return Err(format!("Expected the failure on stderr\n{}", describe(&missing_target)));
    }
    if workspace.path().join("perf_report.json").exists() {
        return Err("No report should be written when resolution fails".to_owned());
    }

    let missing_report = workspace.run(["report", "--file", "absent.json"])?;
    if missing_report.status.code() != Some(4) {
        return Err(describe(&missing_report));
    }

    std::fs::write(workspace.path().join("broken.json"), "{ not json")
        .map_err(|err| format!("write broken report failed: {}", err))?;
    let corrupt = workspace.run(["report", "--file", "broken.json"])?;
    if corrupt.status.code() != Some(4) {
        return Err(describe(&corrupt));
    }

    let bad_levels = workspace.run(["benchmark", "--target", "mock", "--levels", "0"])?;
    if bad_levels.status.code() != Some(2) {
        return Err(describe(&bad_levels));
    }
    Ok(())
}
