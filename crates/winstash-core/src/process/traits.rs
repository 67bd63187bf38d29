//! Process collaborator seam.

use std::path::PathBuf;

use super::errors::ProcessError;
use super::operations;
use super::types::LaunchSpec;

/// OS process operations needed by capture and restore.
pub trait ProcessControl {
    /// Launch detached; returns the child's pid.
    fn spawn_detached(&self, spec: &LaunchSpec) -> Result<u32, ProcessError>;

    fn resolve_executable_path(&self, pid: u32) -> Result<PathBuf, ProcessError>;

    fn resolve_cwd(&self, pid: u32) -> Result<PathBuf, ProcessError>;
}

/// The real OS, via `sysinfo` and `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcesses;

impl ProcessControl for SystemProcesses {
    fn spawn_detached(&self, spec: &LaunchSpec) -> Result<u32, ProcessError> {
        operations::spawn_detached(spec)
    }

    fn resolve_executable_path(&self, pid: u32) -> Result<PathBuf, ProcessError> {
        operations::resolve_executable_path(pid)
    }

    fn resolve_cwd(&self, pid: u32) -> Result<PathBuf, ProcessError> {
        operations::resolve_cwd(pid)
    }
}
