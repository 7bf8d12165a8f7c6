//! Wire types for the `generateContent` REST call.
//!
//! Field names follow the API's camelCase convention via serde renames.
//! Only the fields this client uses are modeled.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One content block: an ordered list of parts.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single part: either text or inline binary data.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// An inline-data part holding base64-encoded bytes.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Base64 payload plus its MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Generation settings: structured output or speech synthesis.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpeechConfig {
    pub voice_config: VoiceConfig,
}

impl SpeechConfig {
    /// Speech settings selecting one prebuilt voice.
    pub fn voice(name: impl Into<String>) -> Self {
        Self {
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: name.into(),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PrebuiltVoiceConfig {
    pub voice_name: String,
}

/// Response body for `generateContent`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Option<&str> {
        self.first_part()?.text.as_deref()
    }

    /// Inline base64 data of the first part of the first candidate.
    pub fn first_inline_data(&self) -> Option<&str> {
        Some(self.first_part()?.inline_data.as_ref()?.data.as_str())
    }

    fn first_part(&self) -> Option<&Part> {
        self.candidates.first()?.content.as_ref()?.parts.first()
    }
}

/// Response schema for the analysis request: seven required fields.
pub(crate) fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "bpm": { "type": "NUMBER" },
            "key": { "type": "STRING" },
            "sentiment": { "type": "STRING" },
            "genre": { "type": "STRING" },
            "lyrics": { "type": "STRING" },
            "suggestion": { "type": "STRING" },
            "instruments": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["bpm", "key", "sentiment", "genre", "lyrics", "suggestion", "instruments"]
    })
}

/// Response schema for the composition request: five required fields.
pub(crate) fn song_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "genre": { "type": "STRING" },
            "mood": { "type": "STRING" },
            "lyrics": { "type": "STRING" },
            "description": { "type": "STRING" }
        },
        "required": ["title", "genre", "mood", "lyrics", "description"]
    })
}
