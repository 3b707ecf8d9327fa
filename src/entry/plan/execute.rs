use std::path::Path;

use procbench::args::DEFAULT_REPORT_PATH;
use procbench::driver::{BenchmarkDriver, SweepPlan};
use procbench::error::AppResult;
use procbench::report::{BenchmarkReport, ReportStore};
use procbench::resolver::SkillTreeResolver;
use procbench::ui::{self, RunSummary, Theme};

use super::types::{RunPlan, Session};

pub(crate) async fn execute_plan(session: Session) -> AppResult<()> {
    let Session {
        plan,
        resolver,
        theme,
    } = session;
    let store = ReportStore::new(DEFAULT_REPORT_PATH);
    let driver = BenchmarkDriver::new(resolver);

    match plan {
        RunPlan::Run { sweep, output } => {
            let report = run_single(&driver, &sweep, theme).await?;
            save(&store, &report, output.as_deref()).await
        }
        RunPlan::Benchmark { sweep, output } => {
            let report = run_sweep(&driver, &sweep, theme).await?;
            save(&store, &report, output.as_deref()).await
        }
        RunPlan::Report { file } => {
            let report = store.read(Some(file.as_path())).await?;
            print_lines(&ui::report_lines(theme, &report))
        }
    }
}

async fn run_single(
    driver: &BenchmarkDriver<SkillTreeResolver>,
    sweep: &SweepPlan,
    theme: Theme,
) -> AppResult<BenchmarkReport> {
    let target = driver.resolve(sweep)?;
    let entry_point = target.entry_point();
    let workers = sweep
        .levels()
        .as_slice()
        .first()
        .map_or(1, |workers| workers.get());
    print_lines(&ui::run_header(
        theme,
        &RunSummary {
            target: sweep.target(),
            entry_point: &entry_point,
            invocation_args: sweep.invocation_args(),
            workers,
            iterations: sweep.iterations().get(),
            timeout: sweep.timeout(),
        },
    ))?;

    let report = driver.run_resolved(sweep, target, |_level| {}).await?;
    let mut lines = vec![String::new()];
    for level in &report.levels {
        lines.extend(ui::level_lines(theme, level));
    }
    lines.push(String::new());
    print_lines(&lines)?;
    Ok(report)
}

async fn run_sweep(
    driver: &BenchmarkDriver<SkillTreeResolver>,
    sweep: &SweepPlan,
    theme: Theme,
) -> AppResult<BenchmarkReport> {
    let target = driver.resolve(sweep)?;
    print_lines(&ui::benchmark_header(
        theme,
        sweep.target(),
        sweep.invocation_args(),
        &sweep.levels().to_string(),
        sweep.iterations().get(),
    ))?;

    let report = driver
        .run_resolved(sweep, target, |level| {
            println!("{}", ui::progress_line(theme, level));
        })
        .await?;

    let mut lines = vec![String::new()];
    lines.extend(ui::comparison_table(theme, &report));
    lines.push(String::new());
    print_lines(&lines)?;
    Ok(report)
}

async fn save(
    store: &ReportStore,
    report: &BenchmarkReport,
    output: Option<&Path>,
) -> AppResult<()> {
    let path = store.write(report, output).await?;
    print_lines(&[ui::saved_line(&path)])
}

fn print_lines(lines: &[String]) -> AppResult<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    ui::emit(&mut handle, lines)?;
    Ok(())
}
