use super::{Rect, WindowDescriptor, WindowId};
use crate::display_servers::{Drawing, WindowSystem};
use serde::{Deserialize, Serialize};

/// Geometry-only stand-in for a window that is being dragged.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<&WindowDescriptor> for Mask {
    fn from(window: &WindowDescriptor) -> Self {
        Self {
            x: window.x,
            y: window.y,
            width: window.width,
            height: window.height,
        }
    }
}

/// Anything the layout engine can pack into a row.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeable {
    Window(WindowDescriptor),
    Mask(Mask),
}

impl Placeable {
    #[must_use]
    pub const fn width(&self) -> i32 {
        match self {
            Self::Window(w) => w.width,
            Self::Mask(m) => m.width,
        }
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        match self {
            Self::Window(w) => w.height,
            Self::Mask(m) => m.height,
        }
    }

    #[must_use]
    pub const fn rect(&self) -> Rect {
        match self {
            Self::Window(w) => w.rect(),
            Self::Mask(m) => Rect::new(m.x, m.y, m.width, m.height),
        }
    }

    /// The real window behind this placeable; masks have none.
    #[must_use]
    pub const fn window_id(&self) -> Option<WindowId> {
        match self {
            Self::Window(w) => Some(w.id),
            Self::Mask(_) => None,
        }
    }

    #[must_use]
    pub const fn is_mask(&self) -> bool {
        matches!(self, Self::Mask(_))
    }

    /// Puts the placeable at `(x, y)`: a window is moved for real, a mask replaces the
    /// placeholder box so only one is ever on screen.
    pub fn draw(&self, x: i32, y: i32, windows: &mut impl WindowSystem, drawing: &mut impl Drawing) {
        match self {
            Self::Window(w) => windows.move_frame(w.id, x, y),
            Self::Mask(m) => {
                drawing.remove_boxes();
                drawing.rect(Rect::new(x, y, m.width, m.height));
            }
        }
    }
}

impl From<WindowDescriptor> for Placeable {
    fn from(window: WindowDescriptor) -> Self {
        Self::Window(window)
    }
}
