//! Restore engine: relaunch a saved workspace and put each window back.

use tracing::{error, info, warn};

use crate::backend::{WindowBackend, WindowId};
use crate::process::{LaunchSpec, ProcessControl};
use crate::resolver::families::is_terminal_class;
use crate::restore::errors::RestoreError;
use crate::restore::reconcile::wait_for_new_window;
use crate::restore::types::{RestoreOptions, RestoreReport, WindowOutcome, WindowRestore};
use crate::store::{WindowConfig, WorkspaceRepository};

pub struct RestoreEngine<'a> {
    backend: &'a dyn WindowBackend,
    processes: &'a dyn ProcessControl,
    options: RestoreOptions,
}

impl<'a> RestoreEngine<'a> {
    pub fn new(
        backend: &'a dyn WindowBackend,
        processes: &'a dyn ProcessControl,
        options: RestoreOptions,
    ) -> Self {
        Self {
            backend,
            processes,
            options,
        }
    }

    /// Relaunch every window of workspace `name`, one at a time, in key order.
    ///
    /// Each program is spawned detached and the next one only starts after the
    /// previous window was found or timed out. A window that never shows up
    /// keeps whatever placement the desktop gave it.
    pub fn restore(
        &self,
        name: &str,
        repo: &WorkspaceRepository,
    ) -> Result<RestoreReport, RestoreError> {
        let workspace = repo.get(name)?;

        info!(
            event = "core.restore.started",
            name = name,
            windows = workspace.len(),
            backend = self.backend.name(),
            timeout_ms = self.options.timeout.as_millis() as u64
        );

        let terminals = if self.options.close_terminal {
            self.open_terminals()
        } else {
            Vec::new()
        };

        let windows = workspace
            .windows()
            .into_iter()
            .map(|(key, config)| WindowRestore {
                key: key.to_string(),
                executable: config.executable.clone(),
                outcome: self.restore_window(key, config),
            })
            .collect::<Vec<_>>();

        for id in &terminals {
            self.backend.close(*id);
        }
        if !terminals.is_empty() {
            info!(
                event = "core.restore.terminals_closed",
                count = terminals.len()
            );
        }

        let report = RestoreReport {
            name: name.to_string(),
            windows,
            closed_terminals: terminals,
        };

        info!(
            event = "core.restore.completed",
            name = name,
            placed = report.placed_count(),
            total = report.windows.len()
        );

        Ok(report)
    }

    fn restore_window(&self, key: &str, config: &WindowConfig) -> WindowOutcome {
        let before = match self.backend.list_windows() {
            Ok(before) => before,
            Err(e) => {
                error!(event = "core.restore.list_failed", key = key, error = %e);
                return WindowOutcome::Failed {
                    message: e.to_string(),
                };
            }
        };

        let spawned =
            LaunchSpec::from_command_line(&config.executable, &config.extra_cmd, &config.cwd)
                .and_then(|spec| self.processes.spawn_detached(&spec));
        let pid = match spawned {
            Ok(pid) => pid,
            Err(e) => {
                error!(
                    event = "core.restore.spawn_failed",
                    key = key,
                    executable = %config.executable,
                    error = %e
                );
                return WindowOutcome::SpawnFailed {
                    message: e.to_string(),
                };
            }
        };

        info!(
            event = "core.restore.spawned",
            key = key,
            executable = %config.executable,
            pid = pid
        );

        match wait_for_new_window(
            self.backend,
            &before,
            Some(pid),
            self.options.timeout,
            self.options.poll_interval,
        ) {
            Some(found) => {
                let (x, y) = config.position;
                let (width, height) = config.size;
                self.backend.move_resize(found.id, x, y, width, height);
                info!(
                    event = "core.restore.window_placed",
                    key = key,
                    window_id = found.id,
                    x = x,
                    y = y,
                    width = width,
                    height = height
                );
                WindowOutcome::Placed { window_id: found.id }
            }
            None => {
                warn!(
                    event = "core.restore.window_not_found",
                    key = key,
                    executable = %config.executable,
                    timeout_ms = self.options.timeout.as_millis() as u64
                );
                WindowOutcome::NotFound
            }
        }
    }

    /// Terminal windows open before anything is relaunched.
    fn open_terminals(&self) -> Vec<WindowId> {
        match self.backend.list_windows() {
            Ok(windows) => windows
                .iter()
                .filter(|w| is_terminal_class(&w.wm_class))
                .map(|w| w.id)
                .collect(),
            Err(e) => {
                warn!(event = "core.restore.terminal_scan_failed", error = %e);
                Vec::new()
            }
        }
    }
}
