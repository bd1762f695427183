use super::{Placeable, Rect};
use serde::{Deserialize, Serialize};

/// One row of the packed layout.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Level {
    pub x: i32,
    pub y: i32,
    /// Sum of child widths plus the spacing between them.
    pub width: i32,
    /// Height of the tallest child.
    pub height: i32,
    pub windows: Vec<Placeable>,
}

impl Level {
    pub(crate) fn push(&mut self, window: Placeable, spacing: i32) {
        if self.width != 0 {
            self.width += spacing;
        }
        self.width += window.width();
        self.height = self.height.max(window.height());
        self.windows.push(window);
    }

    /// Centers the row horizontally in the work area.
    pub(crate) fn finalize(&mut self, work_area: Rect) {
        self.x = (work_area.width - self.width) / 2 + work_area.x;
    }

    /// Positions of the row's children.
    ///
    /// Children advance left to right from `self.x`. A child shorter than the row is nudged
    /// down towards the work area's horizontal centerline, but never past the row's bottom.
    #[must_use]
    pub fn placements(&self, work_area: Rect, spacing: i32) -> Vec<(Placeable, i32, i32)> {
        let (mut x, y) = (self.x, self.y);
        let mut placements = Vec::with_capacity(self.windows.len());
        for window in &self.windows {
            let center_offset =
                (work_area.height / 2 + work_area.y) - (y + window.height() / 2);
            let y_offset = if center_offset > 0 {
                center_offset.min(self.height - window.height())
            } else {
                0
            };
            placements.push((*window, x, y + y_offset));
            x += window.width() + spacing;
        }
        placements
    }
}

/// Outcome of a layout pass.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TileResult {
    pub x: i32,
    pub y: i32,
    pub overflow: bool,
    /// Always `false`: rows are horizontal bands.
    pub vertical: bool,
    pub levels: Vec<Level>,
}

impl TileResult {
    /// Final position of every placed window, rows top to bottom.
    #[must_use]
    pub fn placements(&self, work_area: Rect, spacing: i32) -> Vec<(Placeable, i32, i32)> {
        self.levels
            .iter()
            .flat_map(|level| level.placements(work_area, spacing))
            .collect()
    }

    #[must_use]
    pub fn placed(&self) -> usize {
        self.levels.iter().map(|l| l.windows.len()).sum()
    }
}
