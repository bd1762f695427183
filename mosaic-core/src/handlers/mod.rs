pub mod display_event_handler;
mod drag_handler;
mod relocation_handler;
mod tiling_handler;
mod window_handler;

use super::config::Config;
use super::display_servers::{Drawing, WindowSystem};
use super::models::Manager;
