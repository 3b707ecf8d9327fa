use std::time::Duration;

use crate::args::{ConcurrencyLevels, PositiveUsize, split_command_line};
use crate::error::ValidationError;

/// A validated request to sweep one target over a list of concurrency levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    target: String,
    invocation_args: String,
    args: Vec<String>,
    levels: ConcurrencyLevels,
    iterations: PositiveUsize,
    timeout: Duration,
}

impl SweepPlan {
    /// Builds a plan, splitting `invocation_args` shell-style.
    ///
    /// # Errors
    ///
    /// Returns an error when the target name is blank or the argument string
    /// has unbalanced quotes.
    pub fn new(
        target: &str,
        invocation_args: &str,
        levels: ConcurrencyLevels,
        iterations: PositiveUsize,
        timeout: Duration,
    ) -> Result<Self, ValidationError> {
        let target = target.trim();
        if target.is_empty() {
            return Err(ValidationError::TargetEmpty);
        }
        Ok(Self {
            target: target.to_owned(),
            invocation_args: invocation_args.to_owned(),
            args: split_command_line(invocation_args)?,
            levels,
            iterations,
            timeout,
        })
    }

    /// A single-level sweep, as used by `run`.
    ///
    /// # Errors
    ///
    /// See [`SweepPlan::new`].
    pub fn single(
        target: &str,
        invocation_args: &str,
        workers: PositiveUsize,
        iterations: PositiveUsize,
        timeout: Duration,
    ) -> Result<Self, ValidationError> {
        Self::new(
            target,
            invocation_args,
            ConcurrencyLevels::single(workers),
            iterations,
            timeout,
        )
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn invocation_args(&self) -> &str {
        &self.invocation_args
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub const fn levels(&self) -> &ConcurrencyLevels {
        &self.levels
    }

    #[must_use]
    pub const fn iterations(&self) -> PositiveUsize {
        self.iterations
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
