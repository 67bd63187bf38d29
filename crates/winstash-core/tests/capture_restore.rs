//! End-to-end capture → store → restore flow against a simulated desktop.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use winstash_core::backend::{BackendError, WindowAction, WindowDetails, WindowId, WindowRecord};
use winstash_core::config::CaptureConfig;
use winstash_core::process::{LaunchSpec, ProcessError};
use winstash_core::{
    AcceptAll, CaptureEngine, CaptureOutcome, CaptureRequest, ProcessControl, RestoreEngine,
    RestoreOptions, WindowBackend, WindowOutcome, WorkspaceRepository,
};

struct App {
    exe: PathBuf,
    cwd: PathBuf,
}

#[derive(Default)]
struct State {
    windows: Vec<WindowDetails>,
    apps: HashMap<u32, App>,
    actions: Vec<WindowAction>,
    spawned: Vec<LaunchSpec>,
    next_id: WindowId,
    next_pid: u32,
}

/// One shared desktop serving as both window backend and process table.
///
/// Spawning a program opens a window for it unless it is listed in `headless`.
#[derive(Default)]
struct FakeDesktop {
    state: RefCell<State>,
    headless: Vec<&'static str>,
}

impl FakeDesktop {
    fn open(&self, exe: &str, cwd: &str, class: &str, instance: &str, geometry: (i32, i32, u32, u32)) {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.next_pid += 1;
        let (id, pid) = (state.next_id, 100 + state.next_pid);

        state.apps.insert(
            pid,
            App {
                exe: PathBuf::from(exe),
                cwd: PathBuf::from(cwd),
            },
        );
        state.windows.push(WindowDetails {
            window: WindowRecord {
                id,
                title: format!("{} window", class),
                wm_class: class.to_string(),
                wm_class_instance: instance.to_string(),
                pid: Some(pid),
                focused: false,
            },
            x: geometry.0,
            y: geometry.1,
            width: geometry.2,
            height: geometry.3,
        });
    }

    fn close_everything(&self) {
        self.state.borrow_mut().windows.clear();
    }
}

impl WindowBackend for FakeDesktop {
    fn name(&self) -> &'static str {
        "fake-desktop"
    }

    fn list_windows(&self) -> Result<Vec<WindowRecord>, BackendError> {
        Ok(self
            .state
            .borrow()
            .windows
            .iter()
            .map(|d| d.window.clone())
            .collect())
    }

    fn get_details(&self, id: WindowId) -> Result<WindowDetails, BackendError> {
        self.state
            .borrow()
            .windows
            .iter()
            .find(|d| d.window.id == id)
            .cloned()
            .ok_or_else(|| BackendError::CommandFailed {
                method: "Details".to_string(),
                message: format!("no window {}", id),
            })
    }

    fn perform(&self, action: WindowAction) {
        let mut state = self.state.borrow_mut();
        if let WindowAction::MoveResize {
            id,
            x,
            y,
            width,
            height,
        } = action
            && let Some(window) = state.windows.iter_mut().find(|d| d.window.id == id)
        {
            window.x = x;
            window.y = y;
            window.width = width;
            window.height = height;
        }
        state.actions.push(action);
    }
}

impl ProcessControl for FakeDesktop {
    fn spawn_detached(&self, spec: &LaunchSpec) -> Result<u32, ProcessError> {
        self.state.borrow_mut().spawned.push(spec.clone());
        if self.headless.iter().any(|p| *p == spec.program) {
            return Ok(9999);
        }

        let class = spec.program.clone();
        let cwd = spec.cwd.display().to_string();
        // New windows open at a default spot until moved
        self.open(&spec.program, &cwd, &class, &class, (0, 0, 640, 480));
        Ok(100 + self.state.borrow().next_pid)
    }

    fn resolve_executable_path(&self, pid: u32) -> Result<PathBuf, ProcessError> {
        self.state
            .borrow()
            .apps
            .get(&pid)
            .map(|app| app.exe.clone())
            .ok_or(ProcessError::NotFound { pid })
    }

    fn resolve_cwd(&self, pid: u32) -> Result<PathBuf, ProcessError> {
        self.state
            .borrow()
            .apps
            .get(&pid)
            .map(|app| app.cwd.clone())
            .ok_or(ProcessError::NotFound { pid })
    }
}

fn fast_restore() -> RestoreOptions {
    RestoreOptions {
        timeout: Duration::from_millis(50),
        poll_interval: Duration::from_millis(1),
        close_terminal: false,
    }
}

#[test]
fn test_capture_then_restore_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    let store_path = temp.path().join("workspaces.json");

    let desktop = FakeDesktop::default();
    desktop.open("/usr/bin/gedit", "/home/me/notes", "Gedit", "gedit", (10, 20, 800, 600));
    desktop.open(
        "/opt/google/chrome/chrome",
        "/home/me",
        "Google-chrome",
        "google-chrome",
        (-50, 0, 1200, 900),
    );

    let mut repo = WorkspaceRepository::open(&store_path);
    let report = CaptureEngine::new(&desktop, &desktop, &AcceptAll, &CaptureConfig::default())
        .capture(&CaptureRequest::new("work"), &mut repo)
        .unwrap();

    assert_eq!(report.outcome, CaptureOutcome::Saved { replaced: false });
    assert_eq!(report.captured, 2);

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    assert_eq!(saved["work"]["win0"]["executable"], "/usr/bin/gedit");
    assert_eq!(saved["work"]["win0"]["cwd"], "/home/me/notes");
    assert_eq!(saved["work"]["win0"]["position"], serde_json::json!([10, 20]));
    assert_eq!(saved["work"]["win0"]["size"], serde_json::json!([800, 600]));
    assert_eq!(saved["work"]["win1"]["executable"], "google-chrome --new-window");
    assert_eq!(saved["work"]["win1"]["position"], serde_json::json!([-50, 0]));

    // New session: nothing open, store re-read from disk
    desktop.close_everything();
    let repo = WorkspaceRepository::open(&store_path);

    let report = RestoreEngine::new(&desktop, &desktop, fast_restore())
        .restore("work", &repo)
        .unwrap();

    assert_eq!(report.placed_count(), 2);

    let state = desktop.state.borrow();
    assert_eq!(state.spawned.len(), 2);
    assert_eq!(state.spawned[0].program, "/usr/bin/gedit");
    assert_eq!(state.spawned[0].cwd, PathBuf::from("/home/me/notes"));
    assert_eq!(state.spawned[1].program, "google-chrome");
    assert_eq!(state.spawned[1].args, vec!["--new-window"]);

    let placed: Vec<(i32, i32, u32, u32)> = state
        .windows
        .iter()
        .map(|d| (d.x, d.y, d.width, d.height))
        .collect();
    assert_eq!(placed, vec![(10, 20, 800, 600), (-50, 0, 1200, 900)]);
}

#[test]
fn test_restore_tolerates_app_without_window() {
    let temp = tempfile::tempdir().unwrap();
    let store_path = temp.path().join("workspaces.json");

    let desktop = FakeDesktop {
        headless: vec!["/usr/bin/tray-only"],
        ..Default::default()
    };
    desktop.open("/usr/bin/tray-only", "/", "Tray", "tray", (1, 1, 10, 10));
    desktop.open("/usr/bin/gedit", "/tmp", "Gedit", "gedit", (5, 6, 300, 200));

    let mut repo = WorkspaceRepository::open(&store_path);
    CaptureEngine::new(&desktop, &desktop, &AcceptAll, &CaptureConfig::default())
        .capture(&CaptureRequest::new("mixed"), &mut repo)
        .unwrap();

    desktop.close_everything();
    let report = RestoreEngine::new(&desktop, &desktop, fast_restore())
        .restore("mixed", &repo)
        .unwrap();

    assert_eq!(report.windows[0].outcome, WindowOutcome::NotFound);
    assert!(matches!(
        report.windows[1].outcome,
        WindowOutcome::Placed { .. }
    ));

    let state = desktop.state.borrow();
    let move_resizes = state
        .actions
        .iter()
        .filter(|a| matches!(a, WindowAction::MoveResize { .. }))
        .count();
    assert_eq!(move_resizes, 1);
}

#[test]
fn test_recapture_replaces_workspace() {
    let temp = tempfile::tempdir().unwrap();
    let store_path = temp.path().join("workspaces.json");
    let desktop = FakeDesktop::default();
    desktop.open("/usr/bin/gedit", "/tmp", "Gedit", "gedit", (0, 0, 100, 100));
    desktop.open("/usr/bin/xterm", "/tmp", "XTerm", "xterm", (0, 0, 100, 100));

    let mut repo = WorkspaceRepository::open(&store_path);
    let engine = CaptureEngine::new(&desktop, &desktop, &AcceptAll, &CaptureConfig::default());
    engine
        .capture(&CaptureRequest::new("work"), &mut repo)
        .unwrap();

    desktop.close_everything();
    desktop.open("/usr/bin/gedit", "/srv", "Gedit", "gedit", (1, 1, 50, 50));
    let report = engine
        .capture(&CaptureRequest::new("work"), &mut repo)
        .unwrap();

    assert_eq!(report.outcome, CaptureOutcome::Saved { replaced: true });
    let reopened = WorkspaceRepository::open(&store_path);
    let workspace = reopened.get("work").unwrap();
    assert_eq!(workspace.len(), 1);
    assert_eq!(workspace.get("win0").unwrap().cwd, "/srv");
}
