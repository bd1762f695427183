//! Turning window lists into packed rows.
mod descriptors;
mod rows;

pub use crate::models::{Level, TileResult};
pub use descriptors::build_descriptors;
pub use rows::tile;
