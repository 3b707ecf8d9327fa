use clap::ArgMatches;

use crate::args::BenchArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::super::types::ConfigFile;
use super::util::is_cli;

pub(super) fn apply_common_config(
    args: &mut BenchArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "skills_root")
        && let Some(root) = config.skills_root.clone()
    {
        args.skills_root = Some(root);
    }

    if !is_cli(matches, "root_marker")
        && let Some(marker) = config.root_marker.clone()
    {
        args.root_marker = marker;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if let Some(interpreters) = config.interpreters.as_ref() {
        for (ext, program) in interpreters {
            let program = program.trim();
            if program.is_empty() {
                return Err(AppError::config(ConfigError::EmptyInterpreter {
                    ext: ext.clone(),
                }));
            }
            let ext = ext.trim_start_matches('.').to_ascii_lowercase();
            args.interpreters.insert(ext, program.to_owned());
        }
    }

    Ok(())
}
