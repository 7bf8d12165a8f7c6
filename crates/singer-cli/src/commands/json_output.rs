//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `analyze`, `produce`, `compose`, and `mix`. These types let agents and
//! other tools parse CLI output programmatically.

use serde::{Deserialize, Serialize};
use singer_audio::{AudioError, WavResult};
use singer_remote::{Analysis, SongMetadata};
use singer_studio::StudioError;
use std::path::Path;

/// Error codes for CLI-level failures.
///
/// These codes are stable and can be used for programmatic error handling.
/// Flow and audio failures pass through their own codes (`STUDIO_XXX`,
/// `AUDIO_XXX`) instead.
pub mod error_codes {
    /// Input file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_002";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// A flow stage failed but the session still produced a result
    pub const PARTIAL_FLOW: &str = "CLI_W001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "STUDIO_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Wraps a studio flow error, passing its code through.
    pub fn from_studio(err: &StudioError) -> Self {
        Self::new(err.code(), err.to_string())
    }

    /// Wraps an audio pipeline error, passing its code through.
    pub fn from_audio(err: &AudioError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Details of a rendered WAV file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Path the file was written to
    pub output: String,
    /// Frames per channel
    pub frame_count: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channel_count: u16,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}

impl RenderResult {
    /// Captures the render details of a written WAV file.
    pub fn new(output: &Path, wav: &WavResult) -> Self {
        Self {
            output: output.display().to_string(),
            frame_count: wav.frame_count,
            sample_rate: wav.sample_rate,
            channel_count: wav.channel_count,
            duration_seconds: wav.duration_seconds(),
            pcm_hash: wav.pcm_hash.clone(),
        }
    }
}

/// Output of the `analyze` command in JSON mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeOutput {
    /// Whether the analysis succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// The analysis report (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

impl AnalyzeOutput {
    /// Creates a successful analyze output.
    pub fn success(analysis: Analysis) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            analysis: Some(analysis),
        }
    }

    /// Creates a failed analyze output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            analysis: None,
        }
    }
}

/// Output of the `produce` command in JSON mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduceOutput {
    /// Whether the flow settled playback-ready
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Warnings (e.g. a failed backing synthesis on partial success)
    pub warnings: Vec<JsonWarning>,
    /// The analysis report (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    /// The rendered export (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderResult>,
}

impl ProduceOutput {
    /// Creates a successful produce output.
    pub fn success(
        analysis: Option<Analysis>,
        render: RenderResult,
        warnings: Vec<JsonWarning>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            analysis,
            render: Some(render),
        }
    }

    /// Creates a failed produce output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            warnings: Vec::new(),
            analysis: None,
            render: None,
        }
    }
}

/// Output of the `compose` command in JSON mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeOutput {
    /// Whether the flow settled playback-ready
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// The composed song metadata (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song: Option<SongMetadata>,
    /// The rendered export (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderResult>,
}

impl ComposeOutput {
    /// Creates a successful compose output.
    pub fn success(song: Option<SongMetadata>, render: RenderResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            song,
            render: Some(render),
        }
    }

    /// Creates a failed compose output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            song: None,
            render: None,
        }
    }
}

/// Output of the `mix` command in JSON mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixOutput {
    /// Whether the mixdown succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// The rendered mix (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderResult>,
}

impl MixOutput {
    /// Creates a successful mix output.
    pub fn success(render: RenderResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            render: Some(render),
        }
    }

    /// Creates a failed mix output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            render: None,
        }
    }
}
