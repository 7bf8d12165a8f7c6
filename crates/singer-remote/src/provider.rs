//! Capability traits for the generative service, plus a canned
//! implementation for offline use and deterministic tests.

use std::sync::Mutex;

use async_trait::async_trait;
use base64::Engine;

use crate::error::{RemoteError, RemoteResult};
use crate::protocol::validate_prompt;
use crate::types::{Analysis, SongMetadata};

/// Structured-output operations: clip analysis and song composition.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Analyzes an encoded audio clip.
    async fn analyze(&self, audio: &[u8], mime_type: &str) -> RemoteResult<Analysis>;

    /// Composes song metadata from a free-text prompt.
    ///
    /// Implementations reject prompts that are empty after trimming before
    /// doing any work.
    async fn compose_metadata(&self, prompt: &str) -> RemoteResult<SongMetadata>;
}

/// Audio-output operations. Payloads are base64-encoded headerless s16le
/// PCM in the shape given by [`crate::protocol`].
#[async_trait]
pub trait SynthesisProvider: Send + Sync {
    /// Synthesizes a backing track matching the analysis.
    async fn synthesize_backing(&self, analysis: &Analysis) -> RemoteResult<String>;

    /// Performs a composed song.
    async fn synthesize_performance(&self, song: &SongMetadata) -> RemoteResult<String>;
}

/// A provider that answers from fixed values without touching the network.
///
/// Failure injection covers every operation independently so orchestration
/// tests can exercise each recovery path. Calls are recorded in order.
pub struct CannedProvider {
    analysis: Analysis,
    song: SongMetadata,
    backing_payload: String,
    performance_payload: String,
    fail_analysis: bool,
    fail_backing: bool,
    fail_metadata: bool,
    fail_performance: bool,
    calls: Mutex<Vec<String>>,
}

impl CannedProvider {
    /// Creates a provider with plausible fixed answers.
    pub fn new() -> Self {
        Self {
            analysis: Analysis {
                bpm: 120.0,
                key: "C major".into(),
                sentiment: "upbeat".into(),
                genre: "Electric Pop".into(),
                lyrics: "sunrise over the wires".into(),
                suggestion: "layer a driving synth bass under the hook".into(),
                instruments: vec!["Female Vocals".into(), "Synth Lead".into()],
            },
            song: SongMetadata {
                title: "Static Bloom".into(),
                genre: "Electric Pop".into(),
                mood: "euphoric".into(),
                lyrics: "verse...\nchorus...".into(),
                description: "A burst of color through radio noise.".into(),
            },
            backing_payload: silent_payload(2400),
            performance_payload: silent_payload(4800),
            fail_analysis: false,
            fail_backing: false,
            fail_metadata: false,
            fail_performance: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Overrides the canned analysis.
    pub fn with_analysis(mut self, analysis: Analysis) -> Self {
        self.analysis = analysis;
        self
    }

    /// Overrides the canned song metadata.
    pub fn with_song(mut self, song: SongMetadata) -> Self {
        self.song = song;
        self
    }

    /// Overrides the backing-track payload.
    pub fn with_backing_payload(mut self, payload: impl Into<String>) -> Self {
        self.backing_payload = payload.into();
        self
    }

    /// Overrides the performance payload.
    pub fn with_performance_payload(mut self, payload: impl Into<String>) -> Self {
        self.performance_payload = payload.into();
        self
    }

    /// Makes `analyze` fail.
    pub fn fail_analysis(mut self) -> Self {
        self.fail_analysis = true;
        self
    }

    /// Makes `synthesize_backing` fail.
    pub fn fail_backing(mut self) -> Self {
        self.fail_backing = true;
        self
    }

    /// Makes `compose_metadata` fail.
    pub fn fail_metadata(mut self) -> Self {
        self.fail_metadata = true;
        self
    }

    /// Makes `synthesize_performance` fail.
    pub fn fail_performance(mut self) -> Self {
        self.fail_performance = true;
        self
    }

    /// Operations invoked so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
    }

    fn canned_failure(op: &str) -> RemoteError {
        RemoteError::api(500, format!("canned failure in {op}"))
    }
}

impl Default for CannedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisProvider for CannedProvider {
    async fn analyze(&self, _audio: &[u8], _mime_type: &str) -> RemoteResult<Analysis> {
        self.record("analyze");
        if self.fail_analysis {
            return Err(Self::canned_failure("analyze"));
        }
        Ok(self.analysis.clone())
    }

    async fn compose_metadata(&self, prompt: &str) -> RemoteResult<SongMetadata> {
        self.record("compose_metadata");
        validate_prompt(prompt)?;
        if self.fail_metadata {
            return Err(Self::canned_failure("compose_metadata"));
        }
        Ok(self.song.clone())
    }
}

#[async_trait]
impl SynthesisProvider for CannedProvider {
    async fn synthesize_backing(&self, _analysis: &Analysis) -> RemoteResult<String> {
        self.record("synthesize_backing");
        if self.fail_backing {
            return Err(Self::canned_failure("synthesize_backing"));
        }
        Ok(self.backing_payload.clone())
    }

    async fn synthesize_performance(&self, _song: &SongMetadata) -> RemoteResult<String> {
        self.record("synthesize_performance");
        if self.fail_performance {
            return Err(Self::canned_failure("synthesize_performance"));
        }
        Ok(self.performance_payload.clone())
    }
}

/// Base64 payload of `frames` silent mono s16le samples.
pub fn silent_payload(frames: usize) -> String {
    base64::engine::general_purpose::STANDARD.encode(vec![0u8; frames * 2])
}
