//! Offline stereo rendering of the performance and backing sources.
//!
//! This module combines up to two sources with a fixed gain relationship
//! into a stereo buffer at the engine rate, resampling each source as
//! needed. Rendering is pure and deterministic; the same request always
//! produces the same samples.

#[allow(clippy::module_inception)]
mod mixer;
mod types;

#[cfg(test)]
mod tests_render;
#[cfg(test)]
mod tests_request;

// Re-export public API
pub use mixer::OfflineMixer;
pub use types::{MixRequest, DEFAULT_SECONDARY_GAIN};
