//! Client configuration.

use crate::error::{RemoteError, RemoteResult};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Default REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model answering the structured analysis and composition requests.
pub const TEXT_MODEL: &str = "gemini-2.5-flash";

/// Model answering the audio synthesis requests.
pub const AUDIO_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Deep prebuilt voice, used for the bass/beatbox backing track.
pub const BACKING_VOICE: &str = "Fenrir";

/// Balanced prebuilt voice, used for full song performances.
pub const PERFORMANCE_VOICE: &str = "Kore";

/// Connection settings for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// REST endpoint base, overridable for tests.
    pub base_url: String,
    /// Model for analysis and composition.
    pub text_model: String,
    /// Model for audio synthesis.
    pub audio_model: String,
    /// Voice name for backing tracks.
    pub backing_voice: String,
    /// Voice name for performances.
    pub performance_voice: String,
}

impl GeminiConfig {
    /// Creates a configuration with the default endpoint, models, and
    /// voices.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: TEXT_MODEL.to_string(),
            audio_model: AUDIO_MODEL.to_string(),
            backing_voice: BACKING_VOICE.to_string(),
            performance_voice: PERFORMANCE_VOICE.to_string(),
        }
    }

    /// Reads the API key from the environment.
    ///
    /// # Errors
    /// Returns [`RemoteError::MissingApiKey`] when the variable is unset or
    /// blank. This runs at construction so a missing key surfaces before any
    /// request is attempted.
    pub fn from_env() -> RemoteResult<Self> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(RemoteError::MissingApiKey),
        }
    }

    /// Overrides the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
