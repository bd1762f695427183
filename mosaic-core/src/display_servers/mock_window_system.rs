use super::{Drawing, WindowSystem};
use crate::models::{MonitorId, Point, Rect, WindowId, WindowInfo, WorkspaceId};
use std::collections::HashMap;

/// In-memory window system used by the tests.
#[derive(Debug, Clone)]
pub struct MockWindowSystem {
    pub windows: Vec<WindowInfo>,
    pub workspaces: Vec<WorkspaceId>,
    pub active: Option<WorkspaceId>,
    pub work_areas: HashMap<(WorkspaceId, MonitorId), Rect>,
    pub default_work_area: Option<Rect>,
    pub monitors: Vec<Rect>,
    pub pointer: Point,
    pub focused: Option<WindowId>,
    pub moves: Vec<(WindowId, i32, i32)>,
    pub activations: Vec<WorkspaceId>,
}

impl Default for MockWindowSystem {
    fn default() -> Self {
        Self {
            windows: vec![],
            workspaces: vec![0],
            active: Some(0),
            work_areas: HashMap::new(),
            default_work_area: Some(Rect::new(0, 0, 1000, 500)),
            monitors: vec![Rect::new(0, 0, 1000, 540)],
            pointer: Point::default(),
            focused: None,
            moves: vec![],
            activations: vec![],
        }
    }
}

impl MockWindowSystem {
    /// Adds a normal window on workspace 0, monitor 0.
    pub fn add(&mut self, id: u64, frame: Rect) -> WindowId {
        self.add_on(id, frame, 0, 0)
    }

    pub fn add_on(
        &mut self,
        id: u64,
        frame: Rect,
        workspace: WorkspaceId,
        monitor: MonitorId,
    ) -> WindowId {
        let id = WindowId(id);
        self.windows
            .push(WindowInfo::new(id, frame, monitor, workspace));
        id
    }

    pub fn get_mut(&mut self, id: WindowId) -> &mut WindowInfo {
        self.windows
            .iter_mut()
            .find(|w| w.id == id)
            .expect("window exists in the mock")
    }

    pub fn frame(&self, id: WindowId) -> Rect {
        self.window(id).expect("window exists in the mock").frame
    }
}

impl WindowSystem for MockWindowSystem {
    fn workspace_windows(&self, workspace: WorkspaceId) -> Vec<WindowId> {
        self.windows
            .iter()
            .filter(|w| w.workspace == Some(workspace))
            .map(|w| w.id)
            .collect()
    }

    fn window(&self, id: WindowId) -> Option<WindowInfo> {
        self.windows.iter().find(|w| w.id == id).cloned()
    }

    fn move_frame(&mut self, id: WindowId, x: i32, y: i32) {
        if let Some(w) = self.windows.iter_mut().find(|w| w.id == id) {
            w.frame.x = x;
            w.frame.y = y;
        }
        self.moves.push((id, x, y));
    }

    fn move_resize_frame(&mut self, id: WindowId, frame: Rect) {
        if let Some(w) = self.windows.iter_mut().find(|w| w.id == id) {
            w.frame = frame;
        }
    }

    fn change_workspace(&mut self, id: WindowId, workspace: WorkspaceId) {
        if let Some(w) = self.windows.iter_mut().find(|w| w.id == id) {
            w.workspace = Some(workspace);
        }
    }

    fn focus(&mut self, id: WindowId, _timestamp: u32) {
        self.focused = Some(id);
    }

    fn focused_window(&self) -> Option<WindowId> {
        self.focused
    }

    fn workspaces(&self) -> Vec<WorkspaceId> {
        self.workspaces.clone()
    }

    fn active_workspace(&self) -> Option<WorkspaceId> {
        self.active
    }

    fn append_workspace(&mut self, activate: bool, _timestamp: u32) -> Option<WorkspaceId> {
        let id = self.workspaces.iter().max().map_or(0, |last| last + 1);
        self.workspaces.push(id);
        if activate {
            self.active = Some(id);
        }
        Some(id)
    }

    fn reorder_workspace(&mut self, workspace: WorkspaceId, index: usize) {
        if let Some(current) = self.workspaces.iter().position(|&ws| ws == workspace) {
            self.workspaces.remove(current);
            let index = index.min(self.workspaces.len());
            self.workspaces.insert(index, workspace);
        }
    }

    fn activate_workspace(&mut self, workspace: WorkspaceId, _timestamp: u32) {
        self.active = Some(workspace);
        self.activations.push(workspace);
    }

    fn work_area(&self, workspace: WorkspaceId, monitor: MonitorId) -> Option<Rect> {
        self.work_areas
            .get(&(workspace, monitor))
            .copied()
            .or(self.default_work_area)
    }

    fn monitor_geometry(&self, monitor: MonitorId) -> Option<Rect> {
        self.monitors.get(monitor).copied()
    }

    fn monitor_count(&self) -> usize {
        self.monitors.len()
    }

    fn primary_monitor(&self) -> MonitorId {
        0
    }

    fn pointer(&self) -> Point {
        self.pointer
    }

    fn timestamp(&self) -> u32 {
        0
    }
}

/// Records placeholder boxes instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct MockDrawing {
    pub boxes: Vec<Rect>,
    pub removals: usize,
}

impl Drawing for MockDrawing {
    fn rect(&mut self, rect: Rect) {
        self.boxes.push(rect);
    }

    fn remove_boxes(&mut self) {
        self.boxes.clear();
        self.removals += 1;
    }
}
