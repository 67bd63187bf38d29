//! Workspace repository: the persisted name → workspace document.

pub mod errors;
pub mod handler;
pub mod persistence;
pub mod types;

pub use errors::StoreError;
pub use handler::{DeleteReport, WorkspaceRepository, WorkspaceSummary};
pub use persistence::{load_store, save_store, store_file_path};
pub use types::{WindowConfig, Workspace, WorkspaceStore};
