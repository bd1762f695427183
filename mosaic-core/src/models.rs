//! Objects (such as window descriptors and rows) the engine works with.
mod descriptor;
mod level;
mod manager;
mod mask_registry;
mod mode;
mod placeable;
mod rect;
mod swap_ledger;
mod window;
mod window_type;

pub use descriptor::WindowDescriptor;
pub use level::{Level, TileResult};
pub use manager::Manager;
#[cfg(test)]
pub(crate) use manager::TestManager;
pub use mask_registry::MaskRegistry;
pub use mode::{DragInfo, DragState};
pub use placeable::{Mask, Placeable};
pub use rect::{Point, Rect};
pub use swap_ledger::{resolve, Swap, SwapLedger, ViewKey};
pub use window::{WindowId, WindowInfo};
pub use window_type::WindowType;

pub type MonitorId = usize;
pub type WorkspaceId = usize;
