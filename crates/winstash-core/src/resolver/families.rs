//! Application families that need special relaunch commands.

/// A Chromium-based browser identified by its window class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserFamily {
    pub classes: &'static [&'static str],
    /// Launcher on PATH; also the instance name of ordinary browser windows.
    pub launcher: &'static str,
}

/// A terminal emulator whose windows belong to a server process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalFamily {
    pub classes: &'static [&'static str],
    pub launcher: &'static str,
}

pub const BROWSERS: &[BrowserFamily] = &[
    BrowserFamily {
        classes: &["Google-chrome"],
        launcher: "google-chrome",
    },
    BrowserFamily {
        classes: &["Chromium", "Chromium-browser"],
        launcher: "chromium",
    },
];

pub const TERMINALS: &[TerminalFamily] = &[TerminalFamily {
    classes: &["Gnome-terminal", "gnome-terminal-server", "org.gnome.Terminal"],
    launcher: "gnome-terminal",
}];

/// Separates the `crx` prefix from the app id in web-app instance names.
const WEB_APP_SEPARATOR: char = '_';

impl BrowserFamily {
    pub fn for_class(wm_class: &str) -> Option<&'static BrowserFamily> {
        BROWSERS.iter().find(|b| b.classes.contains(&wm_class))
    }

    /// Command for a window with the given instance name, if the instance is recognized.
    pub fn command_for_instance(&self, instance: &str) -> Option<String> {
        if instance == self.launcher {
            return Some(format!("{} --new-window", self.launcher));
        }

        let (_, app_id) = instance.rsplit_once(WEB_APP_SEPARATOR)?;
        if app_id.is_empty() {
            return None;
        }
        Some(format!("{} --app-id={}", self.launcher, app_id))
    }
}

impl TerminalFamily {
    pub fn for_class(wm_class: &str) -> Option<&'static TerminalFamily> {
        TERMINALS.iter().find(|t| t.classes.contains(&wm_class))
    }
}

/// Whether a window class belongs to a known terminal emulator.
pub fn is_terminal_class(wm_class: &str) -> bool {
    TerminalFamily::for_class(wm_class).is_some()
}
