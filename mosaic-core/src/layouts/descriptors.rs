use crate::models::{MonitorId, WindowDescriptor, WindowId, WindowInfo};

/// Builds descriptors for the windows of one monitor, keeping each window's list index.
///
/// The `reference` window is always described, even when it would be filtered out, so the
/// window being tiled around is always part of the pass. Everything else must be related,
/// visible, on `monitor`, and not maximized on both axes.
#[must_use]
pub fn build_descriptors(
    windows: &[WindowInfo],
    monitor: MonitorId,
    reference: Option<WindowId>,
) -> Vec<WindowDescriptor> {
    windows
        .iter()
        .enumerate()
        .filter(|(_, window)| {
            reference == Some(window.id)
                || !(window.is_excluded() || window.monitor != monitor || window.is_maximized())
        })
        .map(|(index, window)| WindowDescriptor::new(window, index))
        .collect()
}
