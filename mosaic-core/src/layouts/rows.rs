use crate::models::{Level, Placeable, Rect, TileResult};

/// Packs `windows` into rows that fit `work_area`, in order, and centers the rows.
///
/// A row is closed as soon as the next window would make it wider than the work area. A window
/// that cannot be placed without the layout growing taller than the work area, or that is wider
/// than the work area on its own, is skipped and marks the result as overflowing; the rest of
/// the windows are still packed.
///
/// Example arrangement (5 windows, 3 + 2):
/// ```text
/// +------------------------------+
/// |  +----+ +--------+ +----+    |
/// |  |    | |        | |    |    |
/// |  +----+ |        | +----+    |
/// |         +--------+           |
/// |       +------+ +-----+       |
/// |       |      | |     |       |
/// |       +------+ +-----+       |
/// +------------------------------+
/// ```
#[must_use]
pub fn tile(windows: &[Placeable], work_area: Rect, spacing: i32) -> TileResult {
    let total_width = windows
        .iter()
        .map(|w| i64::from(w.width()) + i64::from(spacing))
        .sum::<i64>()
        - i64::from(spacing) * i64::from(!windows.is_empty());
    let estimated_rows = if work_area.width > 0 {
        (total_width as f64 / f64::from(work_area.width)).round() as usize + 1
    } else {
        1
    };
    tracing::trace!(
        "Tiling {} windows ({}px wide) into ~{} rows",
        windows.len(),
        total_width,
        estimated_rows
    );

    let mut levels: Vec<Level> = Vec::with_capacity(estimated_rows.min(windows.len() + 1));
    let mut level = Level::default();
    let mut widest = 0;
    let mut total_height = 0;
    let mut overflow = false;

    for window in windows {
        if level.width.saturating_add(spacing).saturating_add(window.width()) > work_area.width {
            widest = widest.max(level.width);
            total_height += level.height + spacing;
            level.finalize(work_area);
            levels.push(std::mem::take(&mut level));
        }
        if window.height().max(level.height).saturating_add(total_height) > work_area.height
            || window.width().saturating_add(level.width) > work_area.width
        {
            overflow = true;
            continue;
        }
        level.push(*window, spacing);
    }
    widest = widest.max(level.width);
    total_height += level.height;
    level.finalize(work_area);
    levels.push(level);

    let y = (work_area.height - total_height) / 2 + work_area.y;
    let mut top = y;
    for level in &mut levels {
        level.y = top;
        top += level.height + spacing;
    }

    TileResult {
        x: (work_area.width - widest) / 2 + work_area.x,
        y,
        overflow,
        vertical: false,
        levels,
    }
}
