//! Error types for the audio pipeline.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur in the decode/mix/encode pipeline.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Malformed base64 or PCM payload.
    #[error("decode error: {message}")]
    Decode {
        /// Error message.
        message: String,
    },

    /// WAV serialization failure.
    #[error("encode error: {message}")]
    Encode {
        /// Error message.
        message: String,
    },

    /// Offline render failure.
    #[error("mix error: {message}")]
    Mix {
        /// Error message.
        message: String,
    },

    /// Buffer shape violation (mismatched channel lengths, zero channels).
    #[error("invalid buffer: {message}")]
    InvalidBuffer {
        /// Error message.
        message: String,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// WAV file the reader cannot ingest (non-PCM, odd bit depth).
    #[error("unsupported WAV: {message}")]
    UnsupportedWav {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates an encode error.
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// Creates a mix error.
    pub fn mix(message: impl Into<String>) -> Self {
        Self::Mix {
            message: message.into(),
        }
    }

    /// Creates an invalid buffer error.
    pub fn invalid_buffer(message: impl Into<String>) -> Self {
        Self::InvalidBuffer {
            message: message.into(),
        }
    }

    /// Creates an unsupported WAV error.
    pub fn unsupported_wav(message: impl Into<String>) -> Self {
        Self::UnsupportedWav {
            message: message.into(),
        }
    }

    /// Get the error code for reporting.
    ///
    /// Codes are stable and can be used for programmatic error handling.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::Decode { .. } => "AUDIO_001",
            AudioError::Encode { .. } => "AUDIO_002",
            AudioError::Mix { .. } => "AUDIO_003",
            AudioError::InvalidBuffer { .. } => "AUDIO_004",
            AudioError::InvalidSampleRate { .. } => "AUDIO_005",
            AudioError::UnsupportedWav { .. } => "AUDIO_006",
            AudioError::Io(_) => "AUDIO_007",
        }
    }

    /// Get the error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "audio"
    }
}
