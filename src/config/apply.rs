mod section_commands;
mod section_common;
mod util;

use clap::ArgMatches;

use crate::args::BenchArgs;
use crate::error::AppResult;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Values given explicitly on the command line (or through an environment
/// variable bound to a flag) always win over the config file.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut BenchArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    section_common::apply_common_config(args, matches, config)?;
    section_commands::apply_command_config(args, matches, config)
}
