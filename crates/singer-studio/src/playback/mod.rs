//! Playback over an explicitly owned processing context.
//!
//! The controller holds the context and the single active session. Every
//! play request re-validates the context (suspension can happen at any
//! time), stops whatever was playing, and starts the new voices in one
//! pass so primary and secondary tracks share a start tick.

mod context;
mod controller;
mod sink;

#[cfg(feature = "device")]
mod device;

#[cfg(test)]
mod tests_controller;

// Re-export public API
pub use context::{ContextState, PlaybackContext};
pub use controller::PlaybackController;
pub use sink::{AudioBackend, MemoryBackend, VoiceId};

#[cfg(feature = "device")]
pub use device::CpalBackend;
