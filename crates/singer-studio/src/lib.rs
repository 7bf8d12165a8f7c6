//! Singer Ai Studio Orchestration
//!
//! This crate ties the raw-audio pipeline and the remote AI boundary into
//! one interactive studio session: produce a backing track for a vocal
//! take, or compose and perform a song from a text prompt.
//!
//! # Overview
//!
//! A [`StudioSession`] owns all mutable state: the attached clip, decoded
//! tracks, analysis and song metadata, the activity state, and the playback
//! controller. The two flows mirror the studio tabs:
//!
//! - **Producer** - attach a vocal clip, analyze it, synthesize a matching
//!   backing track, then play or export the blend
//! - **Composer** - describe a song, compose its metadata, synthesize a
//!   full performance, then play or export it
//!
//! Failures never leave the session busy: every error settles to `Idle` or
//! `Playback` with a single user-facing message, and a backing-track
//! failure after a successful analysis is a partial success rather than a
//! hard stop.
//!
//! # Playback
//!
//! Playback runs through an [`AudioBackend`] seam. The in-memory backend
//! records voice lifecycles for tests and non-interactive use; the `device`
//! feature adds a `cpal` backend that plays through the default output
//! device. Exactly one session of voices is active at a time.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use singer_remote::GeminiClient;
//! use singer_studio::{EncodedClip, MemoryBackend, PlaybackController, StudioSession};
//!
//! let client = Arc::new(GeminiClient::from_env()?);
//! let controller = PlaybackController::new(MemoryBackend::new());
//! let mut session = StudioSession::new(client.clone(), client, controller);
//!
//! session.attach_clip(EncodedClip::from_file("take.wav".as_ref())?)?;
//! session.produce().await?;
//!
//! let bundle = session.export()?;
//! std::fs::write(&bundle.file_name, &bundle.wav.wav_data)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`state`] - Studio activity states and mode tabs
//! - [`clip`] - Encoded clips and upload validation
//! - [`session`] - The orchestration boundary and its flows
//! - [`playback`] - Context lifecycle, controller, and backends
//! - [`export`] - Mix-and-encode rendering plus file naming
//! - [`error`] - `StudioError` and the user-message policy

pub mod clip;
pub mod error;
pub mod export;
pub mod playback;
pub mod session;
pub mod state;

// Re-export main types at crate root
pub use clip::{EncodedClip, RECORDING_SOURCE_NAME};
pub use error::{FlowStage, StudioError, StudioResult};
pub use export::{export_file_name, render_export, DEFAULT_ENGINE_RATE, EXPORT_PREFIX};
pub use playback::{
    AudioBackend, ContextState, MemoryBackend, PlaybackContext, PlaybackController, VoiceId,
};
pub use session::{ExportBundle, StudioSession};
pub use state::{StudioMode, StudioState};

#[cfg(feature = "device")]
pub use playback::CpalBackend;
