//! Gemini REST implementation of the provider traits.
//!
//! The client speaks `models/{model}:generateContent` against the v1beta
//! endpoint, authenticating with an API key from the environment. Wire
//! shapes are modeled narrowly; configuration (models, voices, endpoint)
//! is held in [`GeminiConfig`].

mod client;
mod config;
mod wire;

// Re-export public API
pub use client::GeminiClient;
pub use config::{GeminiConfig, API_KEY_VAR, AUDIO_MODEL, BACKING_VOICE, PERFORMANCE_VOICE, TEXT_MODEL};
