//! The studio session and its produce/compose flows.

#[allow(clippy::module_inception)]
mod session;

#[cfg(test)]
mod tests_composer;
#[cfg(test)]
mod tests_producer;

// Re-export public API
pub use session::{ExportBundle, StudioSession};
