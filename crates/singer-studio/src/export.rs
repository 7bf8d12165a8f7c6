//! Mix, encode, and name the exported WAV.

use std::sync::OnceLock;

use regex::Regex;

use singer_audio::{AudioResult, MixRequest, OfflineMixer, RawAudioBuffer, WavResult};

/// Sample rate of the offline render target when mixing for export.
pub const DEFAULT_ENGINE_RATE: u32 = 48_000;

/// Prefix applied to every exported file name.
pub const EXPORT_PREFIX: &str = "Singer_Ai";

/// One trailing `.ext` segment: non-empty, no dots or slashes.
const EXTENSION_PATTERN: &str = r"\.[^/.]+$";

static EXTENSION_REGEX: OnceLock<Regex> = OnceLock::new();

fn extension_regex() -> &'static Regex {
    EXTENSION_REGEX.get_or_init(|| Regex::new(EXTENSION_PATTERN).expect("invalid regex pattern"))
}

/// Builds the exported file name from the available source names.
///
/// The upload or recording name wins over the generated song title; with
/// neither, the base is `"song"`. One trailing extension is stripped from
/// the base before the prefix and `.wav` are applied.
pub fn export_file_name(source_name: Option<&str>, title: Option<&str>) -> String {
    let base = source_name.or(title).unwrap_or("song");
    let stripped = extension_regex().replace(base, "");
    format!("{EXPORT_PREFIX}_{stripped}.wav")
}

/// Renders the export WAV from whichever tracks are present.
///
/// With a user track the render goes through the offline mixer at the
/// engine rate, generated track attenuated by the fixed secondary gain.
/// A lone generated track is encoded as-is in its native format.
///
/// # Errors
/// The mixer's empty-request error when no track is present, plus any
/// mixer or encoder failure.
pub fn render_export(
    user: Option<&RawAudioBuffer>,
    generated: Option<&RawAudioBuffer>,
    engine_rate: u32,
) -> AudioResult<WavResult> {
    if user.is_none() {
        if let Some(track) = generated {
            // Nothing to blend against; keep the take's native format.
            return WavResult::from_buffer(track);
        }
    }

    let mut request = MixRequest::new();
    if let Some(track) = user {
        request = request.with_primary(track);
    }
    if let Some(track) = generated {
        request = request.with_secondary(track);
    }

    let mixed = OfflineMixer::new(engine_rate)?.mix(&request)?;
    WavResult::from_buffer(&mixed)
}
