use std::collections::BTreeMap;

/// Default config filenames checked when `--config` is not provided.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["procbench.toml", "procbench.json"];
/// Report written by `run`/`benchmark` and read by `report` when no path is given.
pub const DEFAULT_REPORT_PATH: &str = "perf_report.json";
/// File whose presence marks the root of the skills tree.
pub const DEFAULT_ROOT_MARKER: &str = "IDEAS.md";
pub const DEFAULT_WORKERS: &str = "5";
pub const DEFAULT_ITERATIONS: &str = "20";
pub const DEFAULT_LEVELS: &str = "1,5,10,20";
pub const DEFAULT_TIMEOUT: &str = "30s";

/// Interpreters used for script entry points, keyed by file extension.
#[must_use]
pub fn default_interpreters() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("py".to_owned(), "python3".to_owned()),
        ("sh".to_owned(), "sh".to_owned()),
    ])
}
