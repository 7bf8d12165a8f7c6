//! CLI command implementations

pub mod analyze;
pub mod compose;
pub mod json_output;
pub mod mix;
pub mod produce;

#[cfg(feature = "device")]
pub mod play;

mod report;
mod studio;
