use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use sysinfo::{Pid as SysinfoPid, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::{debug, info};

use crate::process::errors::ProcessError;
use crate::process::types::LaunchSpec;

fn load_process(pid: u32) -> Option<(Option<PathBuf>, Option<PathBuf>)> {
    let mut system = System::new();
    let pid_obj = SysinfoPid::from_u32(pid);
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid_obj]),
        true,
        ProcessRefreshKind::nothing()
            .with_exe(UpdateKind::Always)
            .with_cwd(UpdateKind::Always),
    );

    system.process(pid_obj).map(|process| {
        (
            process.exe().map(|p| p.to_path_buf()),
            process.cwd().map(|p| p.to_path_buf()),
        )
    })
}

/// Resolve a process id to its on-disk executable, following symlinks.
pub fn resolve_executable_path(pid: u32) -> Result<PathBuf, ProcessError> {
    let (exe, _) = load_process(pid).ok_or(ProcessError::NotFound { pid })?;
    let exe = exe.ok_or(ProcessError::ExecutableUnavailable { pid })?;

    match std::fs::canonicalize(&exe) {
        Ok(resolved) => Ok(resolved),
        Err(e) => {
            debug!(
                event = "core.process.canonicalize_failed",
                pid = pid,
                path = %exe.display(),
                error = %e
            );
            Ok(exe)
        }
    }
}

/// Resolve a process id to its current working directory.
pub fn resolve_cwd(pid: u32) -> Result<PathBuf, ProcessError> {
    let (_, cwd) = load_process(pid).ok_or(ProcessError::NotFound { pid })?;
    cwd.ok_or(ProcessError::CwdUnavailable { pid })
}

/// Launch a program in its own session with all standard streams discarded.
///
/// The child is never waited on and survives this process exiting.
pub fn spawn_detached(spec: &LaunchSpec) -> Result<u32, ProcessError> {
    let mut command = Command::new(&spec.program);
    command
        .args(&spec.args)
        .current_dir(&spec.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // SAFETY: setsid is async-signal-safe; pre_exec runs after fork, before exec.
    unsafe {
        command.pre_exec(|| {
            nix::unistd::setsid()
                .map(|_| ())
                .map_err(std::io::Error::from)
        });
    }

    let child = command.spawn().map_err(|e| ProcessError::SpawnFailed {
        program: spec.program.clone(),
        message: e.to_string(),
    })?;
    let pid = child.id();

    info!(
        event = "core.process.spawned",
        program = %spec.program,
        args = ?spec.args,
        cwd = %spec.cwd.display(),
        pid = pid
    );

    Ok(pid)
}
