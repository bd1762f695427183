use super::{Mask, Placeable, WindowDescriptor, WindowId};
use crate::display_servers::Drawing;
use std::collections::HashSet;

/// Windows currently stood in for by a placeholder. Lives for exactly one drag.
#[derive(Debug, Clone, Default)]
pub struct MaskRegistry {
    masked: HashSet<WindowId>,
}

impl MaskRegistry {
    pub fn mask(&mut self, id: WindowId) {
        self.masked.insert(id);
    }

    /// Drops every mask and takes the placeholder visual off screen.
    pub fn unmask_all(&mut self, drawing: &mut impl Drawing) {
        drawing.remove_boxes();
        self.masked.clear();
    }

    #[must_use]
    pub fn is_masked(&self, id: WindowId) -> bool {
        self.masked.contains(&id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masked.is_empty()
    }

    #[must_use]
    pub fn as_placeable(&self, window: WindowDescriptor) -> Placeable {
        if self.is_masked(window.id) {
            Placeable::Mask(Mask::from(&window))
        } else {
            Placeable::Window(window)
        }
    }
}
