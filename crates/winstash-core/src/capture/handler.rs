//! Capture engine: snapshot the open windows into a named workspace.

use tracing::{info, warn};

use crate::backend::{WindowBackend, WindowRecord};
use crate::capture::errors::{CaptureError, WindowCaptureError};
use crate::capture::types::{CaptureOutcome, CaptureReport, CaptureRequest, SkippedWindow};
use crate::config::CaptureConfig;
use crate::process::ProcessControl;
use crate::resolver;
use crate::selector::Selector;
use crate::store::{WindowConfig, Workspace, WorkspaceRepository};

pub struct CaptureEngine<'a> {
    backend: &'a dyn WindowBackend,
    processes: &'a dyn ProcessControl,
    selector: &'a dyn Selector,
    config: CaptureConfig,
}

impl<'a> CaptureEngine<'a> {
    pub fn new(
        backend: &'a dyn WindowBackend,
        processes: &'a dyn ProcessControl,
        selector: &'a dyn Selector,
        config: &CaptureConfig,
    ) -> Self {
        Self {
            backend,
            processes,
            selector,
            config: config.clone(),
        }
    }

    /// Capture the current windows into `repo` under `request.name`.
    ///
    /// A same-named workspace is replaced entirely. When overwrite is disabled
    /// the selector is asked first, and a "no" leaves the store untouched.
    /// Windows that vanish or whose process can't be inspected are skipped.
    pub fn capture(
        &self,
        request: &CaptureRequest,
        repo: &mut WorkspaceRepository,
    ) -> Result<CaptureReport, CaptureError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(CaptureError::InvalidName);
        }

        info!(
            event = "core.capture.started",
            name = name,
            manage = request.manage,
            backend = self.backend.name()
        );

        if repo.contains(name) && !self.config.overwrite() {
            let message = format!("Workspace '{}' already exists. Overwrite it?", name);
            if !self.selector.confirm(&message)? {
                info!(event = "core.capture.overwrite_declined", name = name);
                return Ok(CaptureReport::declined(name));
            }
        }

        let windows = self.select_windows(self.backend.list_windows()?, request.manage)?;

        let mut workspace = Workspace::new();
        let mut skipped = Vec::new();

        for record in &windows {
            match self.capture_window(record) {
                Ok(config) => {
                    let key = workspace.push(config);
                    info!(
                        event = "core.capture.window_captured",
                        key = %key,
                        window_id = record.id,
                        wm_class = %record.wm_class
                    );
                }
                Err(e) => {
                    warn!(
                        event = "core.capture.window_skipped",
                        window_id = record.id,
                        wm_class = %record.wm_class,
                        error = %e
                    );
                    skipped.push(SkippedWindow {
                        window_id: record.id,
                        label: record.label(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let captured = workspace.len();
        let replaced = repo.replace_workspace(name, workspace)?;

        info!(
            event = "core.capture.completed",
            name = name,
            captured = captured,
            skipped = skipped.len(),
            replaced = replaced
        );

        Ok(CaptureReport {
            name: name.to_string(),
            outcome: CaptureOutcome::Saved { replaced },
            captured,
            skipped,
        })
    }

    fn select_windows(
        &self,
        windows: Vec<WindowRecord>,
        manage: bool,
    ) -> Result<Vec<WindowRecord>, CaptureError> {
        if !manage {
            return Ok(windows);
        }

        let labels: Vec<String> = windows.iter().map(WindowRecord::label).collect();
        let mask = self.selector.select(&labels)?;
        if mask.len() != windows.len() {
            return Err(CaptureError::SelectionMismatch {
                expected: windows.len(),
                got: mask.len(),
            });
        }

        Ok(windows
            .into_iter()
            .zip(mask)
            .filter_map(|(window, keep)| keep.then_some(window))
            .collect())
    }

    fn capture_window(&self, record: &WindowRecord) -> Result<WindowConfig, WindowCaptureError> {
        let details = self.backend.get_details(record.id)?;
        let pid = details
            .window
            .pid
            .or(record.pid)
            .ok_or(WindowCaptureError::MissingPid)?;

        // Details may omit class metadata that List reported
        let wm_class = first_non_empty(&details.window.wm_class, &record.wm_class);
        let wm_class_instance = first_non_empty(
            &details.window.wm_class_instance,
            &record.wm_class_instance,
        );

        let exe_path = self.processes.resolve_executable_path(pid)?;
        let executable = resolver::resolve_command(&exe_path, wm_class, wm_class_instance);
        let cwd = self.processes.resolve_cwd(pid)?;

        Ok(WindowConfig {
            size: (details.width, details.height),
            position: (details.x, details.y),
            executable,
            cwd: cwd.display().to_string(),
            extra_cmd: String::new(),
        })
    }
}

fn first_non_empty<'s>(preferred: &'s str, fallback: &'s str) -> &'s str {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}
