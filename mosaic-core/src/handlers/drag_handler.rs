use super::{Config, Drawing, Manager, WindowSystem};
use crate::layouts::build_descriptors;
use crate::models::{
    DragInfo, DragState, MonitorId, Point, WindowDescriptor, WindowId, WorkspaceId,
};
use crate::utils::timer::TimerHandle;

impl<C: Config, W: WindowSystem, D: Drawing> Manager<C, W, D> {
    /// Starts dragging `window` and runs the first tick right away.
    ///
    /// Returns false (and stays idle) when the window is unknown or not one the engine tiles.
    pub fn start_drag(&mut self, window: WindowId) -> bool {
        let Some(info) = self.window_system.window(window) else {
            tracing::warn!("Cannot drag unknown window {}", window);
            return false;
        };
        let Some(workspace) = info.workspace.filter(|_| info.is_related()) else {
            tracing::debug!("Ignoring drag of unrelated window {}", window);
            return false;
        };
        let monitor = info.monitor;

        self.state.drag_timer.cancel();
        self.state.masks.unmask_all(&mut self.drawing);
        self.state.ledger.clear_pending();

        let windows = self.monitor_workspace_windows(workspace, monitor);
        let descriptors = build_descriptors(&windows, monitor, None);
        let origin = self
            .state
            .ledger
            .working_order((workspace, monitor), &descriptors);
        self.state.masks.mask(window);

        let tick = self.state.drag_timer.arm(self.config.drag_tick());
        self.state.drag = DragState::Dragging(DragInfo {
            window,
            workspace,
            monitor,
            origin,
            tick,
        });
        tracing::debug!("Started dragging window {}", window);
        self.drag_tick();
        true
    }

    /// Re-evaluates the drag target under the pointer and previews the swap.
    ///
    /// A swap that would make the view overflow is dropped again straight away.
    pub fn drag_tick(&mut self) {
        let Some(drag) = self.state.drag.info() else {
            return;
        };
        let (window, workspace, monitor, tick) =
            (drag.window, drag.workspace, drag.monitor, drag.tick);
        let target = nearest_window(&drag.origin, self.window_system.pointer());

        match target.filter(|&target| target != window) {
            Some(target) => {
                self.refresh_snapshot(workspace, monitor);
                if let Err(err) = self.state.ledger.set_pending(window, target) {
                    tracing::error!("Could not preview swap: {}", err);
                }
            }
            None => self.state.ledger.clear_pending(),
        }

        if self.tile_workspace_windows(workspace, None, Some(monitor), false) == Some(true) {
            self.state.ledger.clear_pending();
            self.tile_workspace_windows(workspace, None, Some(monitor), false);
        }

        if self.state.drag.is_dragging() {
            self.state.drag_timer.rearm(tick, self.config.drag_tick());
        }
    }

    /// Runs a tick for the timer that fired with `handle`, unless it belongs to an older drag.
    pub(crate) fn on_drag_timer(&mut self, handle: TimerHandle) {
        if self.state.drag.info().is_some_and(|drag| drag.tick == handle) {
            self.drag_tick();
        } else {
            tracing::trace!("Dropping stale drag tick");
        }
    }

    /// Ends the drag on `window`: the previewed swap is committed unless `discard` is set, masks
    /// are dropped, and the view is laid out once more.
    pub fn stop_drag(&mut self, window: WindowId, discard: bool) {
        self.state.drag_timer.cancel();
        let drag = std::mem::take(&mut self.state.drag);

        self.state.masks.unmask_all(&mut self.drawing);
        if !discard {
            self.state.ledger.commit();
        }
        self.state.ledger.clear_pending();

        let view = self
            .window_system
            .window(window)
            .and_then(|w| Some((w.workspace?, w.monitor)))
            .or_else(|| drag.info().map(|d| (d.workspace, d.monitor)));
        if let Some((workspace, monitor)) = view {
            tracing::debug!("Stopped dragging window {}", window);
            self.tile_workspace_windows(workspace, None, Some(monitor), false);
        }
    }

    /// Rebuilds the swap ledger's snapshot for the view being dragged in, in case another view
    /// was laid out since the last tick.
    fn refresh_snapshot(&mut self, workspace: WorkspaceId, monitor: MonitorId) {
        let windows = self.monitor_workspace_windows(workspace, monitor);
        let descriptors = build_descriptors(&windows, monitor, None);
        self.state
            .ledger
            .working_order((workspace, monitor), &descriptors);
    }
}

/// The window whose center is closest to `pointer`. Ties go to the earlier window.
fn nearest_window(windows: &[WindowDescriptor], pointer: Point) -> Option<WindowId> {
    windows
        .iter()
        .map(|w| (w.id, w.rect().distance_to_center(pointer)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}
