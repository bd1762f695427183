//! Seams to the host window manager and its drawing layer.
//!
//! The engine never talks to a real display server; it consumes these two traits and the host
//! provides the implementations.
use crate::models::{MonitorId, Point, Rect, WindowId, WindowInfo, WorkspaceId};

#[cfg(test)]
mod mock_window_system;

#[cfg(test)]
pub use self::mock_window_system::{MockDrawing, MockWindowSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

pub trait WindowSystem {
    /// Windows of a workspace across all monitors, in the host's order.
    fn workspace_windows(&self, workspace: WorkspaceId) -> Vec<WindowId>;

    fn window(&self, id: WindowId) -> Option<WindowInfo>;

    fn move_frame(&mut self, id: WindowId, x: i32, y: i32);

    fn move_resize_frame(&mut self, id: WindowId, frame: Rect);

    fn change_workspace(&mut self, id: WindowId, workspace: WorkspaceId);

    fn focus(&mut self, id: WindowId, timestamp: u32);

    fn focused_window(&self) -> Option<WindowId>;

    /// Workspaces in index order.
    fn workspaces(&self) -> Vec<WorkspaceId>;

    fn active_workspace(&self) -> Option<WorkspaceId>;

    /// Appends a new workspace, optionally switching to it.
    fn append_workspace(&mut self, activate: bool, timestamp: u32) -> Option<WorkspaceId>;

    fn reorder_workspace(&mut self, workspace: WorkspaceId, index: usize);

    fn activate_workspace(&mut self, workspace: WorkspaceId, timestamp: u32);

    /// Usable rectangle of `monitor` on `workspace`, without panels and docks.
    fn work_area(&self, workspace: WorkspaceId, monitor: MonitorId) -> Option<Rect>;

    fn monitor_geometry(&self, monitor: MonitorId) -> Option<Rect>;

    fn monitor_count(&self) -> usize;

    fn primary_monitor(&self) -> MonitorId;

    fn pointer(&self) -> Point;

    /// Monotonic timestamp for activation requests.
    fn timestamp(&self) -> u32;

    fn workspace_index(&self, workspace: WorkspaceId) -> Option<usize> {
        self.workspaces().iter().position(|&ws| ws == workspace)
    }

    fn workspace_count(&self) -> usize {
        self.workspaces().len()
    }

    fn is_active(&self, workspace: WorkspaceId) -> bool {
        self.active_workspace() == Some(workspace)
    }

    fn neighbor(&self, workspace: WorkspaceId, direction: Direction) -> Option<WorkspaceId> {
        let workspaces = self.workspaces();
        let index = workspaces.iter().position(|&ws| ws == workspace)?;
        match direction {
            Direction::Left => index.checked_sub(1).map(|i| workspaces[i]),
            Direction::Right => workspaces.get(index + 1).copied(),
        }
    }
}

/// Placeholder visuals shown where a dragged window would land.
pub trait Drawing {
    fn rect(&mut self, rect: Rect);

    fn remove_boxes(&mut self);
}
