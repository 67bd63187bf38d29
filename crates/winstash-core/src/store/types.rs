use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Prefix of the per-window keys inside a workspace (`win0`, `win1`, ...).
const WINDOW_KEY_PREFIX: &str = "win";

/// Persisted description of one captured window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// `[width, height]`
    pub size: (u32, u32),
    /// `[x, y]`
    pub position: (i32, i32),
    /// Shell-invocable command, possibly with flags.
    pub executable: String,
    /// Absolute working directory of the captured process.
    pub cwd: String,
    /// Extra arguments appended on relaunch.
    #[serde(default)]
    pub extra_cmd: String,
}

/// An ordered set of window configs keyed `winN` by capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workspace {
    windows: BTreeMap<String, WindowConfig>,
}

fn window_key(index: usize) -> String {
    format!("{}{}", WINDOW_KEY_PREFIX, index)
}

fn key_index(key: &str) -> Option<usize> {
    key.strip_prefix(WINDOW_KEY_PREFIX)?.parse().ok()
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a window under the next free `winN` key and return the key.
    pub fn push(&mut self, config: WindowConfig) -> String {
        let next = self
            .windows
            .keys()
            .filter_map(|k| key_index(k))
            .max()
            .map_or(0, |max| max + 1);
        let key = window_key(next);
        self.windows.insert(key.clone(), config);
        key
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&WindowConfig> {
        self.windows.get(key)
    }

    /// Windows in capture order.
    ///
    /// Keys sort by their numeric suffix, so `win10` follows `win9`. Keys
    /// without one (hand-edited files) come last, alphabetically.
    pub fn windows(&self) -> Vec<(&str, &WindowConfig)> {
        let mut ordered: Vec<(&str, &WindowConfig)> = self
            .windows
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        ordered.sort_by_key(|(key, _)| (key_index(key).unwrap_or(usize::MAX), key.to_string()));
        ordered
    }
}

impl FromIterator<WindowConfig> for Workspace {
    fn from_iter<I: IntoIterator<Item = WindowConfig>>(iter: I) -> Self {
        let mut workspace = Workspace::new();
        for config in iter {
            workspace.push(config);
        }
        workspace
    }
}

/// The whole persisted document: workspace name → workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceStore {
    workspaces: BTreeMap<String, Workspace>,
}

impl WorkspaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<&str> {
        self.workspaces.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Workspace> {
        self.workspaces.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.workspaces.contains_key(name)
    }

    /// Insert or wholly replace a workspace. Returns the replaced one, if any.
    pub fn insert(&mut self, name: impl Into<String>, workspace: Workspace) -> Option<Workspace> {
        self.workspaces.insert(name.into(), workspace)
    }

    pub fn remove(&mut self, name: &str) -> Option<Workspace> {
        self.workspaces.remove(name)
    }

    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Workspace)> {
        self.workspaces.iter().map(|(k, v)| (k.as_str(), v))
    }
}
