mod plan;

use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use procbench::args::{BenchArgs, default_interpreters};
use procbench::config::{apply_config, load_config};
use procbench::error::{AppResult, RunError};

use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let Some((mut args, matches)) = parse_args()? else {
        return Ok(());
    };

    crate::system::logger::init_logging(args.verbose, args.no_color);

    args.interpreters = default_interpreters();
    if let Some(config) = load_config(args.config.as_deref())? {
        debug!("Applying config file values");
        apply_config(&mut args, &matches, &config)?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // Returning drops the runtime, which cancels in-flight workers and kills
    // their children.
    runtime.block_on(async {
        let plan = build_plan(args)?;
        tokio::select! {
            result = execute_plan(plan) => result,
            _ = tokio::signal::ctrl_c() => {
                debug!("Received Ctrl-C, stopping");
                Err(RunError::Interrupted.into())
            }
        }
    })
}

fn parse_args() -> AppResult<Option<(BenchArgs, ArgMatches)>> {
    let mut cmd = BenchArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = BenchArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--")
}

#[cfg(test)]
mod tests {
    use super::should_show_help;
    use std::ffi::OsString;

    #[test]
    fn help_only_for_bare_invocation() -> Result<(), String> {
        let bare = [OsString::from("procbench")];
        let dashes = [OsString::from("procbench"), OsString::from("--")];
        let report = [OsString::from("procbench"), OsString::from("report")];
        if !should_show_help(&bare) || !should_show_help(&dashes) {
            return Err("Bare invocation should print help".to_owned());
        }
        if should_show_help(&report) {
            return Err("Subcommand invocation should not print help".to_owned());
        }
        Ok(())
    }
}
