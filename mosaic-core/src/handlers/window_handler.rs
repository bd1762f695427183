use super::{Config, Drawing, Manager, WindowSystem};
use crate::display_event::{GrabOp, SizeChange};
use crate::models::{WindowId, WindowInfo};

impl<C: Config, W: WindowSystem, D: Drawing> Manager<C, W, D> {
    /// Places a newly mapped window: tiled in with its workspace, or sent to a workspace of its
    /// own when it cannot share.
    /// Returns true if the window was handled.
    pub fn window_created_handler(&mut self, id: WindowId) -> bool {
        let Some(window) = self.related_window(id) else {
            return false;
        };
        let Some(workspace) = window.workspace else {
            return false;
        };
        let crowded = window.is_maximized()
            && self
                .monitor_workspace_windows(workspace, window.monitor)
                .len()
                > 1;
        if crowded || !self.window_fits(id, workspace, window.monitor) {
            self.move_oversized_window(id);
        } else {
            self.tile_workspace_windows(workspace, Some(id), Some(window.monitor), false);
        }
        true
    }

    /// Closes the gap a window left behind and forgets the swaps it took part in.
    /// Returns true if a layout pass was run.
    pub fn window_destroyed_handler(&mut self, window: &WindowInfo) -> bool {
        if self
            .state
            .drag
            .info()
            .is_some_and(|drag| drag.window == window.id)
        {
            self.stop_drag(window.id, true);
        }
        self.state.ledger.forget_window(window.id);
        if window.monitor != self.window_system.primary_monitor() {
            return false;
        }
        if let Some(active) = self.window_system.active_workspace() {
            let focused = self.window_system.focused_window();
            self.tile_workspace_windows(active, focused, Some(window.monitor), true);
        }
        if window.is_maximized() {
            if let Some(workspace) = window.workspace {
                let empty = self
                    .monitor_workspace_windows(workspace, window.monitor)
                    .is_empty();
                self.renavigate(workspace, empty);
            }
        }
        true
    }

    /// A window that got maximized (or went fullscreen) next to others is moved to a workspace of
    /// its own. Restoring is left alone.
    /// Returns true if the window was relocated.
    pub fn size_change_handler(&mut self, id: WindowId, change: SizeChange) -> bool {
        if !matches!(change, SizeChange::Maximize | SizeChange::Fullscreen) {
            return false;
        }
        let Some(window) = self.related_window(id) else {
            return false;
        };
        let Some(workspace) = window.workspace else {
            return false;
        };
        let shared = self
            .monitor_workspace_windows(workspace, window.monitor)
            .len()
            > 1;
        if !(window.is_maximized() && shared) {
            return false;
        }
        if self.move_oversized_window(id).is_none() {
            return false;
        }
        self.tile_workspace_windows(workspace, None, Some(window.monitor), false);
        true
    }

    /// Live resize: keeps the workspace tiled around the window without evicting it.
    pub fn size_changed_handler(&mut self, id: WindowId) -> bool {
        let Some(window) = self.related_window(id) else {
            return false;
        };
        let Some(workspace) = window.workspace else {
            return false;
        };
        self.tile_workspace_windows(workspace, Some(id), None, true)
            .is_some()
    }

    pub fn grab_begin_handler(&mut self, id: WindowId, op: GrabOp) -> bool {
        match self.related_window(id) {
            Some(window) if op.is_move() && !window.is_maximized() => self.start_drag(id),
            _ => false,
        }
    }

    pub fn grab_end_handler(&mut self, id: WindowId, op: GrabOp) -> bool {
        let Some(window) = self.related_window(id) else {
            self.stop_drag(id, true);
            return false;
        };
        self.stop_drag(id, false);

        // Re-read: the window may have moved while it was grabbed.
        let window = self.window_system.window(id).unwrap_or(window);
        let Some(workspace) = window.workspace else {
            return true;
        };
        if op.is_move() && !window.is_maximized() {
            self.tile_workspace_windows(workspace, Some(id), None, false);
        }
        if op == GrabOp::ResizingSe {
            self.tile_workspace_windows(workspace, Some(id), None, false);
        }
        true
    }

    fn related_window(&self, id: WindowId) -> Option<WindowInfo> {
        self.window_system.window(id).filter(WindowInfo::is_related)
    }
}
