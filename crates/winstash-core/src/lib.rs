//! winstash-core: capture and restore desktop window layouts
//!
//! This library snapshots the open windows of a GNOME Shell session into
//! named workspaces and relaunches them later at their saved geometry.
//! It is used by the `winstash` CLI.
//!
//! # Main Entry Points
//!
//! - [`capture`] - Snapshot open windows into a workspace
//! - [`restore`] - Relaunch a workspace and reposition its windows
//! - [`store`] - Load, save, list and delete workspaces
//! - [`backend`] - Talk to the window manager
//! - [`config`] - Configuration management

pub mod backend;
pub mod capture;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod power;
pub mod process;
pub mod resolver;
pub mod restore;
pub mod selector;
pub mod store;

// Re-export commonly used types at crate root for convenience
pub use backend::{
    BackendError, GnomeShellBackend, WindowAction, WindowBackend, WindowDetails, WindowId,
    WindowRecord,
};
pub use capture::{CaptureEngine, CaptureError, CaptureOutcome, CaptureReport, CaptureRequest};
pub use config::WinstashConfig;
pub use power::{FinalAction, PowerError};
pub use process::{ProcessControl, SystemProcesses};
pub use restore::{RestoreEngine, RestoreError, RestoreOptions, RestoreReport, WindowOutcome};
pub use selector::{AcceptAll, Selector, SelectorError};
pub use store::{StoreError, WindowConfig, Workspace, WorkspaceRepository, WorkspaceStore};

// Re-export logging initialization
pub use logging::init_logging;
