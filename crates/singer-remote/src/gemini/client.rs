//! Production client over the Gemini REST API.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;

use crate::error::{RemoteError, RemoteResult};
use crate::protocol::{self, validate_prompt};
use crate::provider::{AnalysisProvider, SynthesisProvider};
use crate::types::{Analysis, SongMetadata};

use super::config::GeminiConfig;
use super::wire::{
    analysis_schema, song_schema, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part, SpeechConfig,
};

/// Per-request timeout. Audio synthesis is slow; each flow makes exactly
/// one attempt, so a hung transport has to be cut here.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the `generateContent` endpoint.
///
/// Implements both provider traits: analysis and composition go to the text
/// model with a JSON response schema, synthesis goes to the speech model
/// with a prebuilt voice.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    /// Returns an HTTP error if the TLS backend fails to initialize.
    pub fn new(config: GeminiConfig) -> RemoteResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    /// Creates a client configured from the environment.
    pub fn from_env() -> RemoteResult<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> RemoteResult<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.config.base_url, model);
        log::debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            log::debug!("request to {model} failed with status {status}");
            return Err(RemoteError::api(status.as_u16(), message));
        }

        Ok(response.json().await?)
    }

    fn audio_request(prompt: String, voice: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig::voice(voice)),
                ..Default::default()
            }),
        }
    }

    fn parse_analysis(text: &str) -> RemoteResult<Analysis> {
        let analysis: Analysis = serde_json::from_str(text)
            .map_err(|e| RemoteError::contract(format!("malformed analysis: {e}")))?;
        if analysis.bpm <= 0.0 {
            return Err(RemoteError::contract(format!(
                "bpm must be positive, got {}",
                analysis.bpm
            )));
        }
        Ok(analysis)
    }

    fn parse_song(text: &str) -> RemoteResult<SongMetadata> {
        serde_json::from_str(text)
            .map_err(|e| RemoteError::contract(format!("malformed song metadata: {e}")))
    }
}

#[async_trait]
impl AnalysisProvider for GeminiClient {
    async fn analyze(&self, audio: &[u8], mime_type: &str) -> RemoteResult<Analysis> {
        let mime = if mime_type.is_empty() {
            protocol::DEFAULT_CLIP_MIME
        } else {
            mime_type
        };
        let data = base64::engine::general_purpose::STANDARD.encode(audio);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::inline(mime, data),
                    Part::text(protocol::ANALYSIS_PROMPT),
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(analysis_schema()),
                ..Default::default()
            }),
        };

        log::debug!("analyzing {} byte clip ({mime})", audio.len());
        let response = self.generate(&self.config.text_model, &request).await?;
        let text = response
            .first_text()
            .ok_or_else(|| RemoteError::empty_response("analysis text"))?;
        Self::parse_analysis(text)
    }

    async fn compose_metadata(&self, prompt: &str) -> RemoteResult<SongMetadata> {
        let prompt = validate_prompt(prompt)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(protocol::metadata_prompt(prompt))],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(song_schema()),
                ..Default::default()
            }),
        };

        log::debug!("composing song metadata");
        let response = self.generate(&self.config.text_model, &request).await?;
        let text = response
            .first_text()
            .ok_or_else(|| RemoteError::empty_response("song metadata text"))?;
        Self::parse_song(text)
    }
}

#[async_trait]
impl SynthesisProvider for GeminiClient {
    async fn synthesize_backing(&self, analysis: &Analysis) -> RemoteResult<String> {
        let request = Self::audio_request(
            protocol::backing_prompt(analysis),
            &self.config.backing_voice,
        );

        log::debug!("synthesizing backing track ({} BPM)", analysis.bpm);
        let response = self.generate(&self.config.audio_model, &request).await?;
        response
            .first_inline_data()
            .map(str::to_owned)
            .ok_or_else(|| RemoteError::empty_response("audio data"))
    }

    async fn synthesize_performance(&self, song: &SongMetadata) -> RemoteResult<String> {
        let request = Self::audio_request(
            protocol::performance_prompt(song),
            &self.config.performance_voice,
        );

        log::debug!("synthesizing performance of '{}'", song.title);
        let response = self.generate(&self.config.audio_model, &request).await?;
        response
            .first_inline_data()
            .map(str::to_owned)
            .ok_or_else(|| RemoteError::empty_response("audio data"))
    }
}
