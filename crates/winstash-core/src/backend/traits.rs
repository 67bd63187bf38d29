//! Window backend trait definition.

use super::errors::BackendError;
use super::types::{WindowAction, WindowDetails, WindowId, WindowRecord};

/// Interface to the window-management backend.
///
/// Queries return errors; actions are best effort and never fail from the
/// caller's point of view (an unknown id is a silent no-op).
pub trait WindowBackend {
    /// The canonical name of this backend (e.g., "gnome-shell").
    fn name(&self) -> &'static str;

    /// Enumerate currently open windows.
    fn list_windows(&self) -> Result<Vec<WindowRecord>, BackendError>;

    /// Fetch geometry and metadata for one window.
    fn get_details(&self, id: WindowId) -> Result<WindowDetails, BackendError>;

    /// Fire a window action and discard the outcome.
    fn perform(&self, action: WindowAction);

    fn minimize(&self, id: WindowId) {
        self.perform(WindowAction::Minimize(id));
    }

    fn unminimize(&self, id: WindowId) {
        self.perform(WindowAction::Unminimize(id));
    }

    fn maximize(&self, id: WindowId) {
        self.perform(WindowAction::Maximize(id));
    }

    fn unmaximize(&self, id: WindowId) {
        self.perform(WindowAction::Unmaximize(id));
    }

    fn move_window(&self, id: WindowId, x: i32, y: i32) {
        self.perform(WindowAction::Move { id, x, y });
    }

    fn resize(&self, id: WindowId, width: u32, height: u32) {
        self.perform(WindowAction::Resize { id, width, height });
    }

    fn move_resize(&self, id: WindowId, x: i32, y: i32, width: u32, height: u32) {
        self.perform(WindowAction::MoveResize {
            id,
            x,
            y,
            width,
            height,
        });
    }

    fn move_to_workspace(&self, id: WindowId, workspace: u32) {
        self.perform(WindowAction::MoveToWorkspace { id, workspace });
    }

    fn activate(&self, id: WindowId) {
        self.perform(WindowAction::Activate(id));
    }

    fn close(&self, id: WindowId) {
        self.perform(WindowAction::Close(id));
    }
}
