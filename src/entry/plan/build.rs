use std::path::{Path, PathBuf};

use tracing::debug;

use procbench::args::{BenchArgs, Command};
use procbench::driver::SweepPlan;
use procbench::error::AppResult;
use procbench::resolver::{SkillTreeResolver, discover_root};
use procbench::ui::Theme;

use super::types::{RunPlan, Session};

pub(crate) fn build_plan(args: BenchArgs) -> AppResult<Session> {
    let cwd = std::env::current_dir()?;
    let root = discover_root(
        args.skills_root.as_deref().map(Path::new),
        &args.root_marker,
        &cwd,
    );
    debug!("Skills root: {}", root.display());

    let plan = match args.command {
        Command::Run(run) => RunPlan::Run {
            sweep: SweepPlan::single(
                &run.target,
                &run.cmd,
                run.workers,
                run.iterations,
                run.timeout,
            )?,
            output: run.output.map(PathBuf::from),
        },
        Command::Benchmark(bench) => RunPlan::Benchmark {
            sweep: SweepPlan::new(
                &bench.target,
                &bench.cmd,
                bench.levels,
                bench.iterations,
                bench.timeout,
            )?,
            output: bench.output.map(PathBuf::from),
        },
        Command::Report(report) => RunPlan::Report {
            file: PathBuf::from(report.file),
        },
    };

    Ok(Session {
        plan,
        resolver: SkillTreeResolver::new(root, args.interpreters),
        theme: Theme::detect(args.no_color),
    })
}
