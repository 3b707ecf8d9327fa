use std::path::PathBuf;

use procbench::driver::SweepPlan;
use procbench::resolver::SkillTreeResolver;
use procbench::ui::Theme;

pub(crate) enum RunPlan {
    Run {
        sweep: SweepPlan,
        output: Option<PathBuf>,
    },
    Benchmark {
        sweep: SweepPlan,
        output: Option<PathBuf>,
    },
    Report {
        file: PathBuf,
    },
}

pub(crate) struct Session {
    pub(crate) plan: RunPlan,
    pub(crate) resolver: SkillTreeResolver,
    pub(crate) theme: Theme,
}
