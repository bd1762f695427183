use super::{Rect, WindowId, WindowInfo};
use serde::{Deserialize, Serialize};

/// Lightweight geometry record of a window, rebuilt on every layout pass.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDescriptor {
    /// Position of the window in the workspace/monitor list the descriptors were built from.
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub id: WindowId,
}

impl WindowDescriptor {
    #[must_use]
    pub const fn new(window: &WindowInfo, index: usize) -> Self {
        Self {
            index,
            x: window.frame.x,
            y: window.frame.y,
            width: window.frame.width,
            height: window.frame.height,
            id: window.id,
        }
    }

    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
