//! Window Information
use super::{MonitorId, Rect, WindowType, WorkspaceId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, backend-assigned identifier of a window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of everything the engine needs to know about a window, as reported by the
/// [`WindowSystem`](crate::WindowSystem).
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub id: WindowId,
    pub frame: Rect,
    pub monitor: MonitorId,
    pub workspace: Option<WorkspaceId>,
    pub r#type: WindowType,
    pub attached_dialog: bool,
    pub on_all_workspaces: bool,
    pub hidden: bool,
    pub maximized_horizontally: bool,
    pub maximized_vertically: bool,
}

impl WindowInfo {
    #[must_use]
    pub fn new(id: WindowId, frame: Rect, monitor: MonitorId, workspace: WorkspaceId) -> Self {
        Self {
            id,
            frame,
            monitor,
            workspace: Some(workspace),
            r#type: WindowType::Normal,
            attached_dialog: false,
            on_all_workspaces: false,
            hidden: false,
            maximized_horizontally: false,
            maximized_vertically: false,
        }
    }

    /// A window the engine tiles: a normal, unattached window living on a single workspace.
    #[must_use]
    pub fn is_related(&self) -> bool {
        !self.attached_dialog && self.r#type == WindowType::Normal && !self.on_all_workspaces
    }

    #[must_use]
    pub fn is_excluded(&self) -> bool {
        !self.is_related() || self.hidden
    }

    /// Maximized on both axes. Such windows are tiled around, never tiled.
    #[must_use]
    pub const fn is_maximized(&self) -> bool {
        self.maximized_horizontally && self.maximized_vertically
    }

    pub fn set_maximized(&mut self, value: bool) {
        self.maximized_horizontally = value;
        self.maximized_vertically = value;
    }
}
