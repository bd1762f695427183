use crate::models::{WindowId, WindowInfo};

/// Kind of pointer or keyboard grab the host started or ended on a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabOp {
    Moving,
    KeyboardMoving,
    /// Resizing from the bottom-right corner.
    ResizingSe,
    Other,
}

impl GrabOp {
    #[must_use]
    pub const fn is_move(self) -> bool {
        matches!(self, Self::Moving | Self::KeyboardMoving)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeChange {
    Maximize,
    Unmaximize,
    Fullscreen,
    Unfullscreen,
}

/// Everything the host tells the engine about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilingEvent {
    /// Posted once the window is mapped and has a monitor and workspace.
    WindowCreated(WindowId),
    /// The window is gone; this is its last known state.
    WindowDestroyed(WindowInfo),
    SizeChange(WindowId, SizeChange),
    /// The window's frame changed size (live resize).
    SizeChanged(WindowId),
    GrabBegin(WindowId, GrabOp),
    GrabEnd(WindowId, GrabOp),
    Disable,
}
