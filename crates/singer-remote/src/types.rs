//! Structured results returned by the generative service.

use serde::{Deserialize, Serialize};

/// Musical analysis of a vocal clip.
///
/// Every field is required; the service is asked for this exact shape via a
/// response schema, so a missing field is a contract violation rather than
/// an expected condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Estimated tempo in beats per minute.
    pub bpm: f64,
    /// Musical key (for example "C minor").
    pub key: String,
    /// Sentiment or mood of the performance.
    pub sentiment: String,
    /// Suggested genre.
    pub genre: String,
    /// Transcribed lyrics, possibly empty prose for instrumental clips.
    pub lyrics: String,
    /// Creative production suggestion.
    pub suggestion: String,
    /// Instruments heard in the recording.
    pub instruments: Vec<String>,
}

/// Composed song structure for the composer flow.
///
/// All five fields are required, mirroring the response schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongMetadata {
    /// Song title; also the fallback export name.
    pub title: String,
    /// Genre description.
    pub genre: String,
    /// Mood description.
    pub mood: String,
    /// One verse and one chorus.
    pub lyrics: String,
    /// Short description of the song.
    pub description: String,
}
