use super::{MonitorId, WindowDescriptor, WindowId, WorkspaceId};
use crate::utils::timer::TimerHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragInfo {
    pub window: WindowId,
    pub workspace: WorkspaceId,
    pub monitor: MonitorId,
    /// Where every window of the view was when the drag started; targets are picked from this.
    pub origin: Vec<WindowDescriptor>,
    /// Tick belonging to this drag. A tick carrying any other handle is stale.
    pub tick: TimerHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragInfo),
}

impl DragState {
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[must_use]
    pub const fn info(&self) -> Option<&DragInfo> {
        match self {
            Self::Dragging(info) => Some(info),
            Self::Idle => None,
        }
    }
}
