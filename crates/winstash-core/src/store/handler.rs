//! Repository operations over the persisted workspace document.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::store::errors::StoreError;
use crate::store::persistence::{load_store, save_store};
use crate::store::types::{Workspace, WorkspaceStore};

/// Name and size of one saved workspace, for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceSummary {
    pub name: String,
    pub window_count: usize,
}

/// Outcome of deleting several workspaces at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: Vec<String>,
    pub missing: Vec<String>,
}

/// The workspace document loaded in memory, bound to its file.
///
/// Every mutating operation writes the whole document back.
#[derive(Debug)]
pub struct WorkspaceRepository {
    path: PathBuf,
    store: WorkspaceStore,
}

impl WorkspaceRepository {
    /// Load the document at `path`; absent or corrupt files give an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let store = load_store(&path);
        info!(
            event = "core.store.opened",
            path = %path.display(),
            count = store.len()
        );
        Self { path, store }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &WorkspaceStore {
        &self.store
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    pub fn get(&self, name: &str) -> Result<&Workspace, StoreError> {
        self.store
            .get(name)
            .ok_or_else(|| StoreError::WorkspaceNotFound {
                name: name.to_string(),
            })
    }

    pub fn list_workspaces(&self) -> Vec<WorkspaceSummary> {
        self.store
            .iter()
            .map(|(name, workspace)| WorkspaceSummary {
                name: name.to_string(),
                window_count: workspace.len(),
            })
            .collect()
    }

    /// Replace (or create) a workspace and persist. Returns whether one was replaced.
    pub fn replace_workspace(
        &mut self,
        name: &str,
        workspace: Workspace,
    ) -> Result<bool, StoreError> {
        let window_count = workspace.len();
        let replaced = self.store.insert(name, workspace).is_some();
        save_store(&self.path, &self.store)?;

        info!(
            event = "core.store.workspace_saved",
            name = name,
            window_count = window_count,
            replaced = replaced
        );
        Ok(replaced)
    }

    /// Delete the named workspaces. Unknown names are reported, not fatal.
    ///
    /// The document is only rewritten when something was deleted.
    pub fn delete_workspaces<S: AsRef<str>>(
        &mut self,
        names: &[S],
    ) -> Result<DeleteReport, StoreError> {
        let mut report = DeleteReport::default();

        for name in names {
            let name = name.as_ref();
            if self.store.remove(name).is_some() {
                info!(event = "core.store.workspace_deleted", name = name);
                report.deleted.push(name.to_string());
            } else {
                warn!(event = "core.store.workspace_missing", name = name);
                report.missing.push(name.to_string());
            }
        }

        if !report.deleted.is_empty() {
            save_store(&self.path, &self.store)?;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::WindowConfig;

    fn workspace(executables: &[&str]) -> Workspace {
        executables
            .iter()
            .map(|exe| WindowConfig {
                size: (640, 480),
                position: (0, 0),
                executable: exe.to_string(),
                cwd: "/".to_string(),
                extra_cmd: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_delete_then_list_omits_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspaces.json");

        let mut repo = WorkspaceRepository::open(&path);
        repo.replace_workspace("work", workspace(&["a", "b"])).unwrap();
        repo.replace_workspace("play", workspace(&["c"])).unwrap();

        let report = repo.delete_workspaces(&["work", "ghost"]).unwrap();
        assert_eq!(report.deleted, vec!["work"]);
        assert_eq!(report.missing, vec!["ghost"]);

        let reopened = WorkspaceRepository::open(&path);
        let names: Vec<String> = reopened
            .list_workspaces()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["play"]);
    }

    #[test]
    fn test_replace_is_persisted_whole() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspaces.json");

        let mut repo = WorkspaceRepository::open(&path);
        assert!(!repo.replace_workspace("w", workspace(&["a", "b", "c"])).unwrap());
        assert!(repo.replace_workspace("w", workspace(&["d"])).unwrap());

        let reopened = WorkspaceRepository::open(&path);
        let saved = reopened.get("w").unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.get("win0").unwrap().executable, "d");
    }

    #[test]
    fn test_delete_nothing_does_not_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspaces.json");

        let mut repo = WorkspaceRepository::open(&path);
        let report = repo.delete_workspaces(&["nope"]).unwrap();

        assert!(report.deleted.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_get_missing_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let repo = WorkspaceRepository::open(dir.path().join("workspaces.json"));
        assert!(matches!(
            repo.get("nope"),
            Err(StoreError::WorkspaceNotFound { .. })
        ));
    }
}
