//! Various shared helpers.
pub mod timer;
