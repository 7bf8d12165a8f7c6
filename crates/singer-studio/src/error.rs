//! Error types for the studio orchestration layer.
//!
//! Every failure that crosses the session boundary is tagged with the
//! [`FlowStage`] it occurred in, which makes [`StudioError::user_message`]
//! a pure function of the error: the session surfaces exactly one
//! user-facing string per failure and the caller never inspects sources.

use singer_audio::AudioError;
use singer_remote::RemoteError;
use thiserror::Error;

/// Result type for studio operations.
pub type StudioResult<T> = Result<T, StudioError>;

/// The stage of a produce/compose flow in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    /// Clip analysis.
    Analysis,
    /// Backing-track synthesis and decode.
    Backing,
    /// Song metadata composition.
    Composition,
    /// Performance synthesis and decode.
    Performance,
    /// Mix-and-encode export.
    Export,
}

impl std::fmt::Display for FlowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FlowStage::Analysis => "analysis",
            FlowStage::Backing => "backing synthesis",
            FlowStage::Composition => "composition",
            FlowStage::Performance => "performance synthesis",
            FlowStage::Export => "export",
        };
        write!(f, "{name}")
    }
}

/// Errors surfaced at the studio orchestration boundary.
#[derive(Debug, Error)]
pub enum StudioError {
    /// Clip capture or upload rejection.
    #[error("capture error: {message}")]
    Capture {
        /// User-facing message.
        message: String,
    },

    /// A remote collaborator call failed.
    #[error("{stage} failed: {source}")]
    Remote {
        /// Stage the failure occurred in.
        stage: FlowStage,
        /// Underlying remote error.
        #[source]
        source: RemoteError,
    },

    /// An audio pipeline operation failed.
    #[error("{stage} failed: {source}")]
    Audio {
        /// Stage the failure occurred in.
        stage: FlowStage,
        /// Underlying audio error.
        #[source]
        source: AudioError,
    },

    /// Device or session playback failure.
    #[error("playback error: {message}")]
    Playback {
        /// Error message.
        message: String,
    },

    /// Operation not legal in the current studio state.
    #[error("invalid state: {message}")]
    State {
        /// Error message.
        message: String,
    },
}

impl StudioError {
    /// Creates a capture error.
    pub fn capture(message: impl Into<String>) -> Self {
        Self::Capture {
            message: message.into(),
        }
    }

    /// Wraps a remote failure with the stage it occurred in.
    pub fn remote(stage: FlowStage, source: RemoteError) -> Self {
        Self::Remote { stage, source }
    }

    /// Wraps an audio pipeline failure with the stage it occurred in.
    pub fn audio(stage: FlowStage, source: AudioError) -> Self {
        Self::Audio { stage, source }
    }

    /// Creates a playback error.
    pub fn playback(message: impl Into<String>) -> Self {
        Self::Playback {
            message: message.into(),
        }
    }

    /// Creates an invalid-state error.
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// The single user-facing message for this failure.
    ///
    /// Capture rejections carry their own wording and pass through
    /// verbatim; everything else maps to one generic message per flow
    /// stage. A rejected empty prompt keeps its specific wording
    /// regardless of stage.
    pub fn user_message(&self) -> String {
        let fixed = match self {
            StudioError::Capture { message } => return message.clone(),
            StudioError::Remote {
                source: RemoteError::EmptyPrompt,
                ..
            } => "Please enter a song description.",
            StudioError::Remote { stage, .. } | StudioError::Audio { stage, .. } => match stage {
                FlowStage::Analysis => "Failed to analyze audio. Please try again.",
                FlowStage::Backing => "Failed to generate backing track.",
                FlowStage::Composition | FlowStage::Performance => {
                    "Failed to compose song. Try a different prompt."
                }
                FlowStage::Export => "Failed to create download file.",
            },
            StudioError::Playback { .. } => "Playback failed. Please try again.",
            StudioError::State { .. } => "Please wait for the current operation to finish.",
        };
        fixed.to_string()
    }

    /// Get the error code for reporting.
    ///
    /// Codes are stable and can be used for programmatic error handling.
    pub fn code(&self) -> &'static str {
        match self {
            StudioError::Capture { .. } => "STUDIO_001",
            StudioError::Remote { .. } => "STUDIO_002",
            StudioError::Audio { .. } => "STUDIO_003",
            StudioError::Playback { .. } => "STUDIO_004",
            StudioError::State { .. } => "STUDIO_005",
        }
    }

    /// Get the error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "studio"
    }
}
