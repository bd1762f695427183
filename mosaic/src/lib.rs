//! Configuration and logging for hosts embedding the mosaic tiling engine.
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
mod config;
pub mod logging;

pub use config::*;
