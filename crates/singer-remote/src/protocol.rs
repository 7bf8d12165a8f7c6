//! Protocol constants and prompt construction.
//!
//! Synthesized audio always arrives in one fixed shape; the constants here
//! are protocol knowledge, never inferred from payloads. The prompts carry
//! the producer and songwriter personas the service is steered with.

use crate::error::{RemoteError, RemoteResult};
use crate::types::{Analysis, SongMetadata};

/// Sample rate of synthesized PCM payloads, in Hz.
pub const SYNTH_SAMPLE_RATE_HZ: u32 = 24_000;

/// Channel count of synthesized PCM payloads.
pub const SYNTH_CHANNELS: usize = 1;

/// MIME type assumed for clips that arrive without one. Browser recorders
/// commonly omit the type, and the original recorder produced WebM.
pub const DEFAULT_CLIP_MIME: &str = "audio/webm";

/// Instruction set for the analysis request.
pub const ANALYSIS_PROMPT: &str = "\
You are a world-class music producer named \"Singer Ai\".
Listen to this audio recording. It might be a raw vocal track OR a full song.

1. Transcribe the lyrics (if any).
2. Estimate the BPM (Beats Per Minute).
3. Identify the musical Key.
4. Describe the sentiment/mood.
5. Suggest a genre that fits this style.
6. INSTRUMENT RECOGNITION: Identify and tag all musical instruments heard in the recording. \
Be specific (e.g., 'Distorted Electric Guitar', 'Bass Guitar', '808 Bass', 'Synth Lead', \
'Acoustic Drums', 'Female Vocals').
7. Write a short creative suggestion for a backing track or additional production.";

/// Rejects prompts that are empty after trimming, before any network call.
pub fn validate_prompt(prompt: &str) -> RemoteResult<&str> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(RemoteError::EmptyPrompt);
    }
    Ok(trimmed)
}

/// Builds the backing-track performance prompt from an analysis.
///
/// The synthesis model is a voice model, so the backing track is requested
/// as an a-capella performance of bass and beatbox lines.
pub fn backing_prompt(analysis: &Analysis) -> String {
    format!(
        "(Genre: {}, Key: {}, Tempo: {} BPM, Mood: {})\n\
         Perform a rhythmic instrumental backing track using only your voice (Acapella style).\n\
         \n\
         CRITICAL INSTRUCTION:\n\
         - Simulate a driving \"Bass Guitar\" line (deep vocal resonance).\n\
         - Add \"Electric Pop\" style drum rhythms (beatbox).\n\
         - Create a full, energetic arrangement.\n\
         \n\
         Do not speak words. Make musical sounds like \"Dum dum kah tss...\".\n\
         Make it energetic and full.",
        analysis.genre, analysis.key, analysis.bpm, analysis.sentiment
    )
}

/// Builds the song-structure prompt for the composer flow.
pub fn metadata_prompt(user_prompt: &str) -> String {
    format!(
        "User Prompt: {user_prompt}\n\
         \n\
         You are an expert songwriter and composer. Based on the user's topic, create a song structure.\n\
         1. Create a catchy Title.\n\
         2. Define a specific Genre (e.g., \"Electric Pop\", \"Lo-fi Hip Hop\", \"Cyberpunk Synthwave\", \"Acoustic Folk\").\n\
         3. Define the Mood.\n\
         4. Write short, catchy Lyrics (1 Verse, 1 Chorus).\n\
         5. Write a short description of the song."
    )
}

/// Builds the full-song performance prompt from composed metadata.
pub fn performance_prompt(song: &SongMetadata) -> String {
    format!(
        "Perform the following song in the style of {}.\n\
         Mood: {}.\n\
         \n\
         LYRICS:\n\
         {}\n\
         \n\
         INSTRUCTIONS:\n\
         - Perform this rhythmically.\n\
         - INCORPORATE \"Electric Pop\" energy.\n\
         - Add a vocal \"Bass Guitar\" line underneath the vocals to drive the beat.\n\
         - Add vocal percussion (beatboxing) between lines to keep the beat.\n\
         - Be expressive.\n\
         - If the genre is rap, rap it. If it's folk, recite it melodically.",
        song.genre, song.mood, song.lyrics
    )
}
