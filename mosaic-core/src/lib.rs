//! Row-wrapping tiling engine with interactive drag-to-reorder.
// We deny clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. Layout math mixes pixel integers with float distances on purpose.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod config;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod models;
pub mod state;
pub mod utils;

pub use config::Config;
pub use display_event::{GrabOp, SizeChange, TilingEvent};
pub use display_servers::{Drawing, WindowSystem};
pub use errors::{MosaicError, Result};
pub use layouts::{tile, TileResult};
pub use models::{
    DragState, Manager, MonitorId, Placeable, Rect, WindowDescriptor, WindowId, WindowInfo,
    WorkspaceId,
};
pub use state::State;
