use super::{Config, Drawing, Manager, WindowSystem};
use crate::display_servers::Direction;
use crate::errors::MosaicError;
use crate::models::{Rect, WindowId, WorkspaceId};
use crate::state::Settle;

impl<C: Config, W: WindowSystem, D: Drawing> Manager<C, W, D> {
    /// Moves `window` to a fresh workspace placed right after its own and schedules it to be
    /// tiled there once it has settled.
    ///
    /// Returns the workspace the window ends up on.
    pub fn move_oversized_window(&mut self, window: WindowId) -> Option<WorkspaceId> {
        let Some(info) = self.window_system.window(window) else {
            tracing::warn!("Cannot relocate: {}", MosaicError::UnknownWindow(window));
            return None;
        };
        let Some(origin) = info.workspace else {
            tracing::warn!("Cannot relocate window {}: {}", window, MosaicError::NoWorkspace);
            return None;
        };
        let focus = self.window_system.is_active(origin);
        let timestamp = self.window_system.timestamp();
        let Some(workspace) = self.window_system.append_workspace(focus, timestamp) else {
            tracing::error!("Could not create a workspace for window {}", window);
            return Some(origin);
        };

        self.window_system.change_workspace(window, workspace);
        if let Some(index) = self.window_system.workspace_index(origin) {
            self.window_system.reorder_workspace(workspace, index + 1);
        }
        tracing::debug!(
            "Moved oversized window {} from workspace {} to {}",
            window,
            origin,
            workspace
        );

        let settle = Settle {
            window,
            workspace,
            origin,
            monitor: info.monitor,
            focus,
        };
        self.state.schedule_settle(settle, self.config.settle_delay());
        Some(workspace)
    }

    /// Finishes a relocation: tiles the new workspace around the window, keeps a maximized window
    /// clear of the reserved area at the top of the monitor, and focuses it if its old workspace
    /// was active.
    pub fn settle(&mut self, settle: Settle) {
        self.tile_workspace_windows(settle.workspace, Some(settle.window), None, true);

        let Some(info) = self.window_system.window(settle.window) else {
            return;
        };
        if info.is_maximized() {
            let monitor = self.window_system.monitor_geometry(settle.monitor);
            let work_area = self.window_system.work_area(settle.origin, settle.monitor);
            if let (Some(monitor), Some(work_area)) = (monitor, work_area) {
                let offset = monitor.height - work_area.height;
                let frame = info.frame;
                self.window_system.move_resize_frame(
                    settle.window,
                    Rect::new(0, offset, frame.width, frame.height - offset),
                );
            } else {
                tracing::debug!(
                    "No geometry for monitor {}, leaving window {} where it is",
                    settle.monitor,
                    settle.window
                );
            }
        }
        if settle.focus {
            let timestamp = self.window_system.timestamp();
            self.window_system.focus(settle.window, timestamp);
        }
    }

    /// Moves `window` to the workspace on its left if it fits there.
    ///
    /// Returns the destination, the current workspace when the window does not fit, or `None`
    /// when there is no workspace to the left.
    pub fn move_back_window(&mut self, window: WindowId) -> Option<WorkspaceId> {
        let info = self.window_system.window(window)?;
        let workspace = info.workspace?;
        let Some(previous) = self.window_system.neighbor(workspace, Direction::Left) else {
            tracing::error!("{}", MosaicError::NoAdjacentWorkspace(workspace));
            return None;
        };
        if !self.window_fits(window, previous, info.monitor) {
            return Some(workspace);
        }
        let active = self.window_system.is_active(workspace);
        self.window_system.change_workspace(window, previous);
        if active {
            let timestamp = self.window_system.timestamp();
            self.window_system.activate_workspace(previous, timestamp);
        }
        Some(previous)
    }

    /// Switches away from `workspace` to a neighbor (left first, then right) when `condition`
    /// holds. Nothing happens on the last workspace, and the last workspace is never the target
    /// of a move to the right.
    pub fn renavigate(&mut self, workspace: WorkspaceId, condition: bool) {
        let Some(index) = self.window_system.workspace_index(workspace) else {
            return;
        };
        let last = self.window_system.workspace_count().saturating_sub(1);
        let target = match self.window_system.neighbor(workspace, Direction::Left) {
            Some(left) if left != workspace => left,
            _ => match self.window_system.neighbor(workspace, Direction::Right) {
                Some(right)
                    if right != workspace
                        && self.window_system.workspace_index(right) != Some(last) =>
                {
                    right
                }
                _ => return,
            },
        };
        if condition && index != last {
            tracing::debug!("Leaving workspace {} for {}", workspace, target);
            let timestamp = self.window_system.timestamp();
            self.window_system.activate_workspace(target, timestamp);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_servers::MockWindowSystem;
    use crate::models::{Manager, TestManager};

    fn manager_on(workspaces: Vec<WorkspaceId>) -> TestManager {
        let mut windows = MockWindowSystem::default();
        windows.workspaces = workspaces;
        Manager::new_test(windows)
    }

    #[test]
    fn oversized_window_gets_a_workspace_right_after_its_own() {
        let mut manager = manager_on(vec![0, 1, 2]);
        manager.window_system.add(7, Rect::new(0, 0, 600, 300));

        assert_eq!(manager.move_oversized_window(WindowId(7)), Some(3));
        assert_eq!(manager.window_system.workspaces, vec![0, 3, 1, 2]);
        assert_eq!(manager.window_system.active, Some(3));
        assert_eq!(
            manager.window_system.window(WindowId(7)).unwrap().workspace,
            Some(3)
        );
        assert_eq!(manager.state.pending_settles().count(), 1);
    }

    #[test]
    fn window_from_an_inactive_workspace_moves_quietly() {
        let mut manager = manager_on(vec![0, 1]);
        manager.window_system.add_on(7, Rect::new(0, 0, 600, 300), 1, 0);

        assert_eq!(manager.move_oversized_window(WindowId(7)), Some(2));
        assert_eq!(manager.window_system.active, Some(0));
        let settle = *manager.state.pending_settles().next().unwrap();
        assert!(!settle.focus);
        manager.settle(settle);
        assert_eq!(manager.window_system.focused, None);
    }

    #[test]
    fn settle_tiles_and_focuses_the_window() {
        let mut manager = manager_on(vec![0]);
        manager.window_system.add(7, Rect::new(0, 0, 600, 300));
        manager.move_oversized_window(WindowId(7));

        let settle = *manager.state.pending_settles().next().unwrap();
        manager.settle(settle);
        assert_eq!(
            manager.window_system.frame(WindowId(7)),
            Rect::new(200, 100, 600, 300)
        );
        assert_eq!(manager.window_system.focused, Some(WindowId(7)));
    }

    #[test]
    fn settled_maximized_window_clears_the_top_bar() {
        let mut manager = manager_on(vec![0]);
        manager.window_system.add(7, Rect::new(0, 0, 1000, 540));
        manager.window_system.get_mut(WindowId(7)).set_maximized(true);
        manager.move_oversized_window(WindowId(7));

        let settle = *manager.state.pending_settles().next().unwrap();
        manager.settle(settle);
        assert_eq!(
            manager.window_system.frame(WindowId(7)),
            Rect::new(0, 40, 1000, 500)
        );
    }

    #[test]
    fn unknown_window_is_not_relocated() {
        let mut manager = manager_on(vec![0]);
        assert_eq!(manager.move_oversized_window(WindowId(1)), None);
        assert_eq!(manager.window_system.workspaces, vec![0]);
    }

    #[test]
    fn move_back_needs_a_left_neighbor() {
        let mut manager = manager_on(vec![0, 1]);
        manager.window_system.add(7, Rect::new(0, 0, 300, 300));
        assert_eq!(manager.move_back_window(WindowId(7)), None);
    }

    #[test]
    fn move_back_goes_left_when_there_is_room() {
        let mut manager = manager_on(vec![0, 1]);
        manager.window_system.active = Some(1);
        manager.window_system.add_on(7, Rect::new(0, 0, 300, 300), 1, 0);

        assert_eq!(manager.move_back_window(WindowId(7)), Some(0));
        assert_eq!(
            manager.window_system.window(WindowId(7)).unwrap().workspace,
            Some(0)
        );
        assert_eq!(manager.window_system.activations, vec![0]);
    }

    #[test]
    fn move_back_stays_put_when_the_left_workspace_is_full() {
        let mut manager = manager_on(vec![0, 1]);
        manager.window_system.add(1, Rect::new(0, 0, 600, 300));
        manager.window_system.add_on(7, Rect::new(0, 0, 600, 300), 1, 0);

        assert_eq!(manager.move_back_window(WindowId(7)), Some(1));
        assert_eq!(
            manager.window_system.window(WindowId(7)).unwrap().workspace,
            Some(1)
        );
        assert!(manager.window_system.activations.is_empty());
    }

    #[test]
    fn renavigate_prefers_the_left_neighbor() {
        let mut manager = manager_on(vec![0, 1, 2]);
        manager.renavigate(1, true);
        assert_eq!(manager.window_system.activations, vec![0]);
    }

    #[test]
    fn renavigate_falls_back_to_the_right() {
        let mut manager = manager_on(vec![0, 1, 2]);
        manager.renavigate(0, true);
        assert_eq!(manager.window_system.activations, vec![1]);
    }

    #[test]
    fn renavigate_never_targets_the_last_workspace_from_the_first() {
        let mut manager = manager_on(vec![0, 1]);
        manager.renavigate(0, true);
        assert!(manager.window_system.activations.is_empty());
    }

    #[test]
    fn renavigate_leaves_the_last_workspace_and_false_conditions_alone() {
        let mut manager = manager_on(vec![0, 1, 2]);
        manager.renavigate(2, true);
        manager.renavigate(1, false);
        assert!(manager.window_system.activations.is_empty());
    }
}
