use clap::Parser;
use std::collections::BTreeMap;

use super::super::defaults::DEFAULT_ROOT_MARKER;
use super::super::parsers::parse_bool_env;
use super::commands::Command;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = concat!(
        "Concurrent load tester for command-line tools - closed-loop worker pools, ",
        "concurrency sweeps, latency percentiles, and JSON benchmark reports."
    )
)]
pub struct BenchArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (sets log level to debug unless overridden by PROCBENCH_LOG/RUST_LOG)
    #[arg(long, short = 'v', global = true, help_heading = "Common Options")]
    pub verbose: bool,

    /// Path to config file (TOML/JSON).
    /// Defaults to ./procbench.toml or ./procbench.json if present.
    #[arg(long, global = true, help_heading = "Common Options")]
    pub config: Option<String>,

    /// Directory tree searched for targets
    /// (defaults to the nearest ancestor holding the root marker)
    #[arg(long = "skills-root", global = true, help_heading = "Common Options")]
    pub skills_root: Option<String>,

    /// Marker file identifying the skills root when searching upward
    #[arg(
        long = "root-marker",
        global = true,
        default_value = DEFAULT_ROOT_MARKER,
        help_heading = "Common Options"
    )]
    pub root_marker: String,

    /// Disable color output
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        global = true,
        value_parser = parse_bool_env,
        help_heading = "Common Options"
    )]
    pub no_color: bool,

    /// Script extension to interpreter mapping (config only)
    #[arg(skip)]
    pub interpreters: BTreeMap<String, String>,
}
