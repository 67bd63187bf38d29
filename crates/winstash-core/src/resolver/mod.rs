//! Executable resolution.
//!
//! Turns a running window's executable path and class metadata into a
//! command line that should reopen an equivalent window later.

pub mod families;

use std::path::{Component, Path};

use tracing::debug;

pub use families::{BROWSERS, BrowserFamily, TERMINALS, TerminalFamily};

/// First path component of snap-packaged executables (`/snap/<name>/<rev>/...`).
const SNAP_ROOT: &str = "snap";

/// Resolve a relaunch command. First match wins:
///
/// 1. snap-packaged path: the final path segment (the package launcher)
/// 2. known browser: `--new-window`, or app mode for installed web apps
/// 3. known terminal: the terminal's canonical launcher
/// 4. the path itself
pub fn resolve_command(exe_path: &Path, wm_class: &str, wm_class_instance: &str) -> String {
    let raw = exe_path.to_string_lossy().into_owned();

    if is_snap_path(exe_path)
        && let Some(name) = exe_path.file_name()
    {
        let launcher = name.to_string_lossy().into_owned();
        debug!(
            event = "core.resolver.snap_matched",
            path = %raw,
            launcher = %launcher
        );
        return launcher;
    }

    if let Some(browser) = BrowserFamily::for_class(wm_class)
        && let Some(command) = browser.command_for_instance(wm_class_instance)
    {
        debug!(
            event = "core.resolver.browser_matched",
            wm_class = wm_class,
            command = %command
        );
        return command;
    }

    if let Some(terminal) = TerminalFamily::for_class(wm_class) {
        debug!(
            event = "core.resolver.terminal_matched",
            wm_class = wm_class,
            launcher = terminal.launcher
        );
        return terminal.launcher.to_string();
    }

    raw
}

fn is_snap_path(path: &Path) -> bool {
    let mut components = path.components();
    matches!(components.next(), Some(Component::RootDir))
        && matches!(components.next(), Some(Component::Normal(first)) if first == SNAP_ROOT)
}
