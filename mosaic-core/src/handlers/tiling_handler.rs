use super::{Config, Drawing, Manager, WindowSystem};
use crate::errors::{MosaicError, Result};
use crate::layouts::{build_descriptors, tile};
use crate::models::{
    MonitorId, Placeable, Rect, TileResult, ViewKey, WindowDescriptor, WindowId, WindowInfo,
    WorkspaceId,
};

/// The windows of one workspace view, ready to be laid out.
struct WorkingInfo {
    view: ViewKey,
    /// Related windows of the view in host order; descriptor indices point into this.
    windows: Vec<WindowInfo>,
    descriptors: Vec<WindowDescriptor>,
    work_area: Rect,
}

impl<C: Config, W: WindowSystem, D: Drawing> Manager<C, W, D> {
    /// Related windows of `workspace` that live on `monitor`, in host order.
    pub fn monitor_workspace_windows(
        &self,
        workspace: WorkspaceId,
        monitor: MonitorId,
    ) -> Vec<WindowInfo> {
        self.window_system
            .workspace_windows(workspace)
            .into_iter()
            .filter_map(|id| self.window_system.window(id))
            .filter(|w| w.monitor == monitor && w.is_related())
            .collect()
    }

    /// Gathers the view a layout pass works on. The reference window's monitor wins over
    /// `monitor`.
    fn working_info(
        &self,
        workspace: WorkspaceId,
        reference: Option<&WindowInfo>,
        monitor: Option<MonitorId>,
    ) -> Result<WorkingInfo> {
        if self.window_system.workspace_index(workspace).is_none() {
            return Err(MosaicError::NoWorkspace);
        }
        let monitor = reference
            .map(|w| w.monitor)
            .or(monitor)
            .ok_or(MosaicError::NoMonitor)?;
        let windows = self.monitor_workspace_windows(workspace, monitor);
        let descriptors = build_descriptors(&windows, monitor, reference.map(|w| w.id));
        let work_area = self
            .window_system
            .work_area(workspace, monitor)
            .ok_or(MosaicError::NoWorkArea { workspace, monitor })?;
        Ok(WorkingInfo {
            view: (workspace, monitor),
            windows,
            descriptors,
            work_area,
        })
    }

    /// Lays out one workspace view and moves its windows into place.
    ///
    /// Returns whether the view overflows, or `None` when there was nothing to lay out (unknown
    /// workspace, window or monitor, or no work area). When the pass overflows around
    /// `reference` and `keep_oversized` is not set, the reference window is evicted to a new
    /// workspace and the rest is laid out without it.
    pub fn tile_workspace_windows(
        &mut self,
        workspace: WorkspaceId,
        reference: Option<WindowId>,
        monitor: Option<MonitorId>,
        keep_oversized: bool,
    ) -> Option<bool> {
        let reference = match reference.map(|id| self.window_system.window(id).ok_or(id)) {
            Some(Ok(info)) => Some(info),
            Some(Err(id)) => {
                tracing::warn!("Skipping layout pass: {}", MosaicError::UnknownWindow(id));
                return None;
            }
            None => None,
        };
        let info = match self.working_info(workspace, reference.as_ref(), monitor) {
            Ok(info) => info,
            Err(err) => {
                tracing::debug!("Skipping layout pass: {}", err);
                return None;
            }
        };

        let ordered = self.state.ledger.working_order(info.view, &info.descriptors);
        let placeables: Vec<Placeable> = ordered
            .into_iter()
            .map(|d| self.state.masks.as_placeable(d))
            .collect();
        let spacing = self.config.window_spacing();
        let mut result = tile(&placeables, info.work_area, spacing);
        let overflow = overflows(&info.windows, result.overflow);

        if let Some(reference) = reference.filter(|_| overflow && !keep_oversized) {
            tracing::debug!(
                "Workspace {} overflows, evicting window {}",
                workspace,
                reference.id
            );
            let remaining: Vec<Placeable> = placeables
                .into_iter()
                .filter(|p| p.window_id() != Some(reference.id))
                .collect();
            self.move_oversized_window(reference.id);
            result = tile(&remaining, info.work_area, spacing);
        }
        self.draw(&result, info.work_area);
        Some(overflow)
    }

    /// Whether `window` could join `workspace` on `monitor` without the view overflowing.
    /// Nothing is moved or recorded.
    pub fn window_fits(
        &self,
        window: WindowId,
        workspace: WorkspaceId,
        monitor: MonitorId,
    ) -> bool {
        let Some(candidate) = self.window_system.window(window) else {
            return false;
        };
        let info = match self.working_info(workspace, None, Some(monitor)) {
            Ok(info) => info,
            Err(err) => {
                tracing::debug!("Cannot tell whether window {} fits: {}", window, err);
                return false;
            }
        };
        if candidate.workspace == Some(workspace) {
            return true;
        }
        if info.windows.iter().any(WindowInfo::is_maximized) {
            return false;
        }

        let mut placeables: Vec<Placeable> = self
            .state
            .ledger
            .preview(info.view, &info.descriptors)
            .into_iter()
            .map(|d| self.state.masks.as_placeable(d))
            .collect();
        placeables.push(WindowDescriptor::new(&candidate, info.windows.len()).into());
        !tile(&placeables, info.work_area, self.config.window_spacing()).overflow
    }

    /// Lays out every workspace on every monitor without evicting anything.
    pub fn tile_all_workspaces(&mut self) {
        tracing::trace!("Re-tiling all workspaces");
        for workspace in self.window_system.workspaces() {
            for monitor in 0..self.window_system.monitor_count() {
                self.tile_workspace_windows(workspace, None, Some(monitor), true);
            }
        }
    }

    fn draw(&mut self, result: &TileResult, work_area: Rect) {
        for (placeable, x, y) in result.placements(work_area, self.config.window_spacing()) {
            placeable.draw(x, y, &mut self.window_system, &mut self.drawing);
        }
    }
}

/// Overflow of a view: never with one window or none, always when a maximized window shares
/// the view, otherwise whatever packing found.
fn overflows(windows: &[WindowInfo], packed: bool) -> bool {
    if windows.len() <= 1 {
        return false;
    }
    packed || windows.iter().any(WindowInfo::is_maximized)
}
