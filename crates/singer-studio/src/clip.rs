//! Encoded audio clips as handed to the analysis collaborator.

use std::path::Path;

use singer_remote::protocol::DEFAULT_CLIP_MIME;

use crate::error::{StudioError, StudioResult};

/// Source name applied to live recordings.
pub const RECORDING_SOURCE_NAME: &str = "Vocal Recording";

/// An opaque encoded audio clip plus its declared MIME type.
///
/// The bytes are never decoded locally for analysis; they travel to the
/// remote collaborator as-is. Producer flows that also need local samples
/// pair the clip with a decoded buffer at attach time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedClip {
    bytes: Vec<u8>,
    mime_type: String,
    source_name: String,
}

impl EncodedClip {
    /// Creates a clip from raw encoded bytes.
    ///
    /// The MIME type may be empty; [`EncodedClip::mime_or_default`] applies
    /// the protocol default in that case.
    pub fn new(
        bytes: Vec<u8>,
        mime_type: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            source_name: source_name.into(),
        }
    }

    /// Creates a clip from a live recording take.
    pub fn recorded(bytes: Vec<u8>) -> Self {
        Self::new(bytes, DEFAULT_CLIP_MIME, RECORDING_SOURCE_NAME)
    }

    /// Loads a clip from a local audio file.
    ///
    /// The file must carry a recognized audio extension; anything else is
    /// rejected the same way an invalid upload is.
    ///
    /// # Errors
    /// Returns a capture error for unreadable files or non-audio uploads.
    pub fn from_file(path: &Path) -> StudioResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let mime_type = mime_for_extension(extension)
            .ok_or_else(|| StudioError::capture("Please upload a valid audio file."))?;

        let bytes = std::fs::read(path).map_err(|err| {
            StudioError::capture(format!("cannot read {}: {err}", path.display()))
        })?;

        let source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "song".to_string());

        log::debug!(
            "loaded clip {source_name} ({} bytes, {mime_type})",
            bytes.len()
        );
        Ok(Self::new(bytes, mime_type, source_name))
    }

    /// Raw encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Declared MIME type, possibly empty.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Declared MIME type with the protocol default applied when empty.
    pub fn mime_or_default(&self) -> &str {
        if self.mime_type.is_empty() {
            DEFAULT_CLIP_MIME
        } else {
            &self.mime_type
        }
    }

    /// Name of the clip's source, used for export naming.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

/// Maps an audio file extension to its MIME type.
///
/// Returns `None` for anything that is not a recognized audio container,
/// which callers treat as an invalid upload.
fn mime_for_extension(extension: &str) -> Option<&'static str> {
    let lowered = extension.to_ascii_lowercase();
    let mime = match lowered.as_str() {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "webm" => "audio/webm",
        "m4a" | "mp4" => "audio/mp4",
        "aac" => "audio/aac",
        "aiff" | "aif" => "audio/aiff",
        _ => return None,
    };
    Some(mime)
}
