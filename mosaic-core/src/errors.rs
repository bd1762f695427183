use crate::models::{MonitorId, WindowId, WorkspaceId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MosaicError>;

/// Everything that can go wrong inside a layout pass. None of these are fatal: handlers log them
/// and treat the pass as a no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MosaicError {
    #[error("no workspace available")]
    NoWorkspace,
    #[error("no monitor available")]
    NoMonitor,
    #[error("no work area for workspace {workspace} on monitor {monitor}")]
    NoWorkArea {
        workspace: WorkspaceId,
        monitor: MonitorId,
    },
    #[error("unknown window {0}")]
    UnknownWindow(WindowId),
    #[error("could not find both windows {a} and {b} in the working set")]
    UnresolvedSwap { a: WindowId, b: WindowId },
    #[error("there is no workspace next to workspace {0}")]
    NoAdjacentWorkspace(WorkspaceId),
}
