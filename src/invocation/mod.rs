//! Single timed execution of a target process.
mod group;
mod outcome;


use std::ffi::OsString;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::{Instant, timeout};
use tracing::debug;

use crate::resolver::Target;

pub use outcome::InvocationResult;

/// Upper bound for one invocation when the caller does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to launch the target once: the resolved entry point,
/// the caller's arguments, and the per-invocation time limit.
#[derive(Debug, Clone)]
pub struct Invocation {
    target: Target,
    args: Vec<OsString>,
    timeout: Duration,
}

impl Invocation {
    #[must_use]
    pub fn new<I, S>(target: Target, args: I, timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            target,
            args: args.into_iter().map(Into::into).collect(),
            timeout,
        }
    }

    /// Runs the target once and reports what happened.
    ///
    /// Never fails: spawn errors, non-zero exits, and timeouts are all
    /// captured in the returned [`InvocationResult`]. The target runs in its
    /// own process group; on timeout the whole group is killed, so processes
    /// it forked do not outlive the invocation. The recorded duration is then
    /// the time until the deadline.
    pub async fn execute(&self) -> InvocationResult {
        let mut command = Command::new(self.target.program());
        command
            .args(self.target.leading_args())
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        group::isolate(&mut command);

        let start = Instant::now();
        let child = match command.spawn() {
            Ok(child) => child,
            Err(err) => {
                debug!(
                    "Failed to start {}: {}",
                    self.target.program().display(),
                    err
                );
                return InvocationResult::spawn_failed(start.elapsed(), &err);
            }
        };

        let process_group = child.id();
        // Dropping the pending wait on timeout drops the child, which kills it.
        match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                let result = InvocationResult::from_output(&output, start.elapsed());
                if let Some(message) = result.error_message.as_deref() {
                    debug!("Target exited with {}: {}", result.exit_code, message);
                }
                result
            }
            Ok(Err(err)) => {
                debug!("Failed waiting on target: {}", err);
                InvocationResult::spawn_failed(start.elapsed(), &err)
            }
            Err(_elapsed) => {
                let elapsed = start.elapsed();
                group::kill(process_group);
                debug!("Invocation timed out after {:?}", elapsed);
                InvocationResult::timed_out(elapsed, self.timeout)
            }
        }
    }
}
