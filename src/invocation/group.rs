use tokio::process::Command;

/// Starts the child as leader of a fresh process group.
#[cfg(unix)]
pub(super) fn isolate(command: &mut Command) {
    command.process_group(0);
}

#[cfg(not(unix))]
pub(super) const fn isolate(_command: &mut Command) {}

/// Sends SIGKILL to every process in the group led by `leader`.
#[cfg(unix)]
pub(super) fn kill(leader: Option<u32>) {
    let Some(group) = leader
        .and_then(|pid| libc::pid_t::try_from(pid).ok())
        .filter(|pid| *pid > 0)
    else {
        return;
    };
    // Safety: killpg only signals processes; `group` is a positive pgid created
    // by `isolate` for this child, never our own group.
    let status = unsafe { libc::killpg(group, libc::SIGKILL) };
    if status != 0 {
        tracing::debug!(
            "Process group {} already gone: {}",
            group,
            std::io::Error::last_os_error()
        );
    }
}

#[cfg(not(unix))]
pub(super) const fn kill(_leader: Option<u32>) {}
