use serde::{Deserialize, Deserializer, Serialize};

use super::protocol::{Method, Param};

/// Backend-assigned window id. Only valid while the window is open.
pub type WindowId = u64;

/// One open window as reported by the backend's `List` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    #[serde(default, deserialize_with = "string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub wm_class: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub wm_class_instance: String,
    /// Owning process. `None` when the backend could not tell (reported as 0 or -1).
    #[serde(default, deserialize_with = "positive_pid")]
    pub pid: Option<u32>,
    #[serde(default, alias = "focus")]
    pub focused: bool,
}

impl WindowRecord {
    /// Label shown to the operator when choosing windows.
    pub fn label(&self) -> String {
        match (self.title.is_empty(), self.wm_class.is_empty()) {
            (false, false) => format!("{} ({})", self.title, self.wm_class),
            (false, true) => self.title.clone(),
            (true, false) => self.wm_class.clone(),
            (true, true) => format!("[Window {}]", self.id),
        }
    }
}

/// Result of the backend's `Details` call: the record plus geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDetails {
    #[serde(flatten)]
    pub window: WindowRecord,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Fire-and-forget window manipulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    Minimize(WindowId),
    Unminimize(WindowId),
    Maximize(WindowId),
    Unmaximize(WindowId),
    Move {
        id: WindowId,
        x: i32,
        y: i32,
    },
    Resize {
        id: WindowId,
        width: u32,
        height: u32,
    },
    MoveResize {
        id: WindowId,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    MoveToWorkspace {
        id: WindowId,
        workspace: u32,
    },
    Activate(WindowId),
    Close(WindowId),
}

impl WindowAction {
    pub fn method(&self) -> Method {
        match self {
            WindowAction::Minimize(_) => Method::Minimize,
            WindowAction::Unminimize(_) => Method::Unminimize,
            WindowAction::Maximize(_) => Method::Maximize,
            WindowAction::Unmaximize(_) => Method::Unmaximize,
            WindowAction::Move { .. } => Method::Move,
            WindowAction::Resize { .. } => Method::Resize,
            WindowAction::MoveResize { .. } => Method::MoveResize,
            WindowAction::MoveToWorkspace { .. } => Method::MoveToWorkspace,
            WindowAction::Activate(_) => Method::Activate,
            WindowAction::Close(_) => Method::Close,
        }
    }

    pub fn params(&self) -> Vec<Param> {
        match *self {
            WindowAction::Minimize(id)
            | WindowAction::Unminimize(id)
            | WindowAction::Maximize(id)
            | WindowAction::Unmaximize(id)
            | WindowAction::Activate(id)
            | WindowAction::Close(id) => vec![id.into()],
            WindowAction::Move { id, x, y } => vec![id.into(), x.into(), y.into()],
            WindowAction::Resize { id, width, height } => {
                vec![id.into(), width.into(), height.into()]
            }
            WindowAction::MoveResize {
                id,
                x,
                y,
                width,
                height,
            } => vec![id.into(), x.into(), y.into(), width.into(), height.into()],
            WindowAction::MoveToWorkspace { id, workspace } => vec![id.into(), workspace.into()],
        }
    }

    pub fn window_id(&self) -> WindowId {
        match *self {
            WindowAction::Minimize(id)
            | WindowAction::Unminimize(id)
            | WindowAction::Maximize(id)
            | WindowAction::Unmaximize(id)
            | WindowAction::Activate(id)
            | WindowAction::Close(id) => id,
            WindowAction::Move { id, .. }
            | WindowAction::Resize { id, .. }
            | WindowAction::MoveResize { id, .. }
            | WindowAction::MoveToWorkspace { id, .. } => id,
        }
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn positive_pid<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|pid| u32::try_from(pid).ok()).filter(|pid| *pid > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_record_from_extension_json() {
        let json = r#"{"wm_class":"firefox","wm_class_instance":"Navigator","pid":4242,"id":1782648393,"frame_type":0,"window_type":0,"focus":true,"in_current_workspace":true}"#;
        let record: WindowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1782648393);
        assert_eq!(record.wm_class, "firefox");
        assert_eq!(record.wm_class_instance, "Navigator");
        assert_eq!(record.pid, Some(4242));
        assert!(record.focused);
        assert_eq!(record.title, "");
    }

    #[test]
    fn test_window_record_tolerates_null_class_and_unknown_pid() {
        let json = r#"{"id":7,"wm_class":null,"pid":-1}"#;
        let record: WindowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.wm_class, "");
        assert_eq!(record.pid, None);
        assert!(!record.focused);
    }

    #[test]
    fn test_window_details_flattens_record() {
        let json = r#"{"id":9,"title":"Terminal","wm_class":"Gnome-terminal","wm_class_instance":"gnome-terminal-server","pid":100,"focus":false,"x":-12,"y":40,"width":800,"height":600,"maximized":0}"#;
        let details: WindowDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.window.id, 9);
        assert_eq!(details.window.title, "Terminal");
        assert_eq!((details.x, details.y), (-12, 40));
        assert_eq!((details.width, details.height), (800, 600));
    }

    #[test]
    fn test_label_fallbacks() {
        let mut record = WindowRecord {
            id: 3,
            title: "Inbox".to_string(),
            wm_class: "Thunderbird".to_string(),
            wm_class_instance: String::new(),
            pid: None,
            focused: false,
        };
        assert_eq!(record.label(), "Inbox (Thunderbird)");
        record.wm_class.clear();
        assert_eq!(record.label(), "Inbox");
        record.title.clear();
        assert_eq!(record.label(), "[Window 3]");
    }

    #[test]
    fn test_move_resize_params_in_order() {
        let action = WindowAction::MoveResize {
            id: 11,
            x: -5,
            y: 0,
            width: 640,
            height: 480,
        };
        assert_eq!(action.method(), Method::MoveResize);
        let rendered: Vec<String> = action.params().iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["11", "-5", "0", "640", "480"]);
        assert_eq!(action.window_id(), 11);
    }
}
