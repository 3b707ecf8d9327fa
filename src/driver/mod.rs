//! Sequential sweeps over concurrency levels.
mod plan;


use std::sync::Arc;

use chrono::Utc;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::AppResult;
use crate::invocation::Invocation;
use crate::pool::run_level;
use crate::report::{BenchmarkReport, LevelResult, report_timestamp};
use crate::resolver::{Resolver, Target};

pub use plan::SweepPlan;

/// Runs sweeps against targets looked up through `R`.
#[derive(Debug)]
pub struct BenchmarkDriver<R> {
    resolver: R,
}

impl<R> BenchmarkDriver<R>
where
    R: Resolver,
{
    #[must_use]
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Looks up the plan's target.
    ///
    /// # Errors
    ///
    /// Returns an error when the target cannot be resolved.
    pub fn resolve(&self, plan: &SweepPlan) -> AppResult<Target> {
        Ok(self.resolver.resolve(plan.target())?)
    }

    /// Resolves the target once, then runs every level in order.
    ///
    /// # Errors
    ///
    /// Returns an error when resolution fails (before any level runs) or a
    /// level cannot complete its batch.
    pub async fn run<F>(&self, plan: &SweepPlan, on_level: F) -> AppResult<BenchmarkReport>
    where
        F: FnMut(&LevelResult),
    {
        let target = self.resolve(plan)?;
        self.run_resolved(plan, target, on_level).await
    }

    /// Runs every level of `plan` against an already-resolved target.
    ///
    /// `on_level` sees each level as soon as its batch drains. The report is
    /// timestamped once the last level finishes.
    ///
    /// # Errors
    ///
    /// Returns an error when a level cannot complete its batch.
    pub async fn run_resolved<F>(
        &self,
        plan: &SweepPlan,
        target: Target,
        mut on_level: F,
    ) -> AppResult<BenchmarkReport>
    where
        F: FnMut(&LevelResult),
    {
        let invocation = Arc::new(Invocation::new(target, plan.args(), plan.timeout()));
        let mut report = BenchmarkReport::new(plan.target(), plan.invocation_args());
        let sweep_start = Instant::now();

        for workers in plan.levels().as_slice() {
            debug!(
                target_name = plan.target(),
                workers = workers.get(),
                iterations = plan.iterations().get(),
                "Starting level"
            );
            let level = run_level(Arc::clone(&invocation), *workers, plan.iterations()).await?;
            info!(
                workers = level.concurrency,
                throughput = level.throughput_per_second,
                failures = level.failure_count,
                timeouts = level.timeout_count,
                "Level finished"
            );
            on_level(&level);
            report.levels.push(level);
        }

        report.timestamp = report_timestamp(Utc::now());
        info!(
            "Sweep of {} levels finished in {:.3}s",
            report.levels.len(),
            sweep_start.elapsed().as_secs_f64()
        );
        Ok(report)
    }
}
