use std::process::Output;
use std::time::Duration;

/// Exit code recorded when the process produced none (spawn failure, timeout, signal).
pub const NO_EXIT_CODE: i32 = -1;

/// Outcome of one invocation. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResult {
    pub succeeded: bool,
    pub exit_code: i32,
    pub duration_seconds: f64,
    pub timed_out: bool,
    pub error_message: Option<String>,
}

impl InvocationResult {
    pub(super) fn from_output(output: &Output, elapsed: Duration) -> Self {
        let Some(exit_code) = output.status.code() else {
            return Self {
                succeeded: false,
                exit_code: NO_EXIT_CODE,
                duration_seconds: elapsed.as_secs_f64(),
                timed_out: false,
                error_message: Some(format!("terminated abnormally ({})", output.status)),
            };
        };
        let error_message = if exit_code == 0 {
            None
        } else {
            last_line(&output.stderr).or_else(|| Some(format!("exited with code {}", exit_code)))
        };
        Self {
            succeeded: exit_code == 0,
            exit_code,
            duration_seconds: elapsed.as_secs_f64(),
            timed_out: false,
            error_message,
        }
    }

    pub(super) fn timed_out(elapsed: Duration, limit: Duration) -> Self {
        Self {
            succeeded: false,
            exit_code: NO_EXIT_CODE,
            duration_seconds: elapsed.as_secs_f64(),
            timed_out: true,
            error_message: Some(format!("timed out after {:?}", limit)),
        }
    }

    pub(super) fn spawn_failed(elapsed: Duration, err: &std::io::Error) -> Self {
        Self {
            succeeded: false,
            exit_code: NO_EXIT_CODE,
            duration_seconds: elapsed.as_secs_f64(),
            timed_out: false,
            error_message: Some(err.to_string()),
        }
    }

    /// Test/mock constructor for results that did not come from a real process.
    #[must_use]
    pub const fn synthetic(succeeded: bool, duration_seconds: f64, timed_out: bool) -> Self {
        Self {
            succeeded,
            exit_code: if succeeded { 0 } else { NO_EXIT_CODE },
            duration_seconds,
            timed_out,
            error_message: None,
        }
    }
}

fn last_line(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(ToOwned::to_owned)
}
