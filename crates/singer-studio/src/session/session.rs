//! Session state and the orchestration boundary.

use std::sync::Arc;

use singer_audio::{decode_base64_pcm, RawAudioBuffer, WavResult, DEFAULT_SECONDARY_GAIN};
use singer_remote::protocol::{validate_prompt, SYNTH_CHANNELS, SYNTH_SAMPLE_RATE_HZ};
use singer_remote::{Analysis, AnalysisProvider, SongMetadata, SynthesisProvider};

use crate::clip::EncodedClip;
use crate::error::{FlowStage, StudioError, StudioResult};
use crate::export::{export_file_name, render_export, DEFAULT_ENGINE_RATE};
use crate::playback::PlaybackController;
use crate::state::{StudioMode, StudioState};

/// A finished export: file name plus the encoded WAV.
#[derive(Debug)]
pub struct ExportBundle {
    /// File name under the export naming policy.
    pub file_name: String,
    /// The encoded WAV and its PCM digest.
    pub wav: WavResult,
}

/// One interactive studio session.
///
/// Owns every piece of mutable flow state: the attached clip, decoded
/// tracks, analysis and song metadata, the playback controller, and the
/// activity state. Failures are converted to one user-facing message and a
/// settled state here; the session is never left busy after an error.
pub struct StudioSession {
    analysis_provider: Arc<dyn AnalysisProvider>,
    synthesis_provider: Arc<dyn SynthesisProvider>,
    controller: PlaybackController,
    mode: StudioMode,
    state: StudioState,
    clip: Option<EncodedClip>,
    user_track: Option<RawAudioBuffer>,
    analysis: Option<Analysis>,
    song: Option<SongMetadata>,
    generated_track: Option<RawAudioBuffer>,
    source_name: Option<String>,
    last_error: Option<String>,
    engine_rate: u32,
}

impl StudioSession {
    /// Creates an idle producer-mode session.
    pub fn new(
        analysis_provider: Arc<dyn AnalysisProvider>,
        synthesis_provider: Arc<dyn SynthesisProvider>,
        controller: PlaybackController,
    ) -> Self {
        Self {
            analysis_provider,
            synthesis_provider,
            controller,
            mode: StudioMode::default(),
            state: StudioState::default(),
            clip: None,
            user_track: None,
            analysis: None,
            song: None,
            generated_track: None,
            source_name: None,
            last_error: None,
            engine_rate: DEFAULT_ENGINE_RATE,
        }
    }

    /// Overrides the offline render rate used for export mixes.
    pub fn with_engine_rate(mut self, engine_rate: u32) -> Self {
        self.engine_rate = engine_rate;
        self
    }

    /// Active tab.
    pub fn mode(&self) -> StudioMode {
        self.mode
    }

    /// Current activity state.
    pub fn state(&self) -> StudioState {
        self.state
    }

    /// Analysis of the attached clip, once produced.
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    /// Composed song metadata, once produced.
    pub fn song(&self) -> Option<&SongMetadata> {
        self.song.as_ref()
    }

    /// The user's decoded track, if one was attached.
    pub fn user_track(&self) -> Option<&RawAudioBuffer> {
        self.user_track.as_ref()
    }

    /// The decoded synthesized track, once produced.
    pub fn generated_track(&self) -> Option<&RawAudioBuffer> {
        self.generated_track.as_ref()
    }

    /// Name of the clip or song driving export naming.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// The user-facing message of the most recent failure.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True while the playback session holds started voices.
    pub fn is_playing(&self) -> bool {
        self.controller.is_playing()
    }

    /// Switches the active tab.
    ///
    /// Allowed only in a settled state; switching resets the session, even
    /// to the tab already active.
    ///
    /// # Errors
    /// Refused while a flow or recording is in flight.
    pub fn set_mode(&mut self, mode: StudioMode) -> StudioResult<()> {
        if !self.state.allows_mode_switch() {
            return Err(StudioError::state(format!(
                "cannot switch modes while {}",
                self.state
            )));
        }
        self.mode = mode;
        self.reset();
        Ok(())
    }

    /// Clears every flow artifact and returns to idle.
    ///
    /// Playback is stopped best-effort first.
    pub fn reset(&mut self) {
        self.controller.stop_all();
        self.clip = None;
        self.user_track = None;
        self.analysis = None;
        self.song = None;
        self.generated_track = None;
        self.source_name = None;
        self.last_error = None;
        self.state = StudioState::Idle;
    }

    /// Marks the start of a live capture.
    ///
    /// The capture device itself lives outside this crate; the session only
    /// tracks the state so flows and mode switches refuse to run mid-take.
    ///
    /// # Errors
    /// Refused while another flow is in flight.
    pub fn begin_recording(&mut self) -> StudioResult<()> {
        self.ensure_settled("start recording")?;
        self.reset();
        self.state = StudioState::Recording;
        Ok(())
    }

    /// Completes a live capture, attaching the recorded bytes as the clip.
    ///
    /// # Errors
    /// Refused unless a recording is in progress.
    pub fn finish_recording(&mut self, bytes: Vec<u8>) -> StudioResult<()> {
        if self.state != StudioState::Recording {
            return Err(StudioError::state("no recording in progress"));
        }
        self.state = StudioState::Idle;
        let clip = EncodedClip::recorded(bytes);
        self.source_name = Some(clip.source_name().to_string());
        self.clip = Some(clip);
        Ok(())
    }

    /// Attaches a clip for analysis without local samples.
    ///
    /// # Errors
    /// Refused while a flow or recording is in flight.
    pub fn attach_clip(&mut self, clip: EncodedClip) -> StudioResult<()> {
        self.ensure_settled("attach a clip")?;
        self.source_name = Some(clip.source_name().to_string());
        self.clip = Some(clip);
        Ok(())
    }

    /// Attaches a clip together with its decoded samples.
    ///
    /// The samples become the user track blended into playback and export.
    ///
    /// # Errors
    /// Refused while a flow or recording is in flight.
    pub fn attach_track(&mut self, clip: EncodedClip, track: RawAudioBuffer) -> StudioResult<()> {
        self.attach_clip(clip)?;
        self.user_track = Some(track);
        Ok(())
    }

    /// Runs the full producer flow on the attached clip.
    ///
    /// Analysis failure settles back to idle and is returned. A backing
    /// synthesis or decode failure after successful analysis is recorded as
    /// the last error, but the flow still settles playback-ready with
    /// whatever succeeded.
    ///
    /// # Errors
    /// Missing-clip misuse and analysis-stage failures. Partial success is
    /// not an error.
    pub async fn produce(&mut self) -> StudioResult<()> {
        self.ensure_settled("start producing")?;
        let Some(clip) = self.clip.clone() else {
            return Err(StudioError::state("no clip attached"));
        };

        self.last_error = None;
        self.state = StudioState::Analyzing;
        log::debug!("analyzing clip {}", clip.source_name());

        let analysis = match self
            .analysis_provider
            .analyze(clip.bytes(), clip.mime_or_default())
            .await
        {
            Ok(analysis) => analysis,
            Err(err) => {
                let err = StudioError::remote(FlowStage::Analysis, err);
                self.fail(StudioState::Idle, &err);
                return Err(err);
            }
        };
        self.state = StudioState::Generating;

        let backing = self.synthesize_backing(&analysis).await;
        self.analysis = Some(analysis);
        match backing {
            Ok(track) => {
                self.generated_track = Some(track);
            }
            Err(err) => {
                // Partial success: the analysis stands and the user track
                // is still playable, so the flow settles playback-ready.
                log::warn!("backing synthesis failed, keeping analysis: {err}");
                self.last_error = Some(err.user_message());
            }
        }
        self.state = StudioState::Playback;
        Ok(())
    }

    /// Runs the composer flow on a text prompt.
    ///
    /// A prompt that is empty after trimming is rejected before any remote
    /// call, leaving the state untouched. Any later failure settles back to
    /// idle. On full success the song title becomes the export source name.
    ///
    /// # Errors
    /// The empty-prompt rejection and any composition or performance
    /// failure.
    pub async fn compose(&mut self, prompt: &str) -> StudioResult<()> {
        self.ensure_settled("start composing")?;
        if let Err(err) = validate_prompt(prompt) {
            let err = StudioError::remote(FlowStage::Composition, err);
            self.last_error = Some(err.user_message());
            return Err(err);
        }

        self.last_error = None;
        self.state = StudioState::Analyzing;
        log::debug!("composing song metadata");

        let song = match self.analysis_provider.compose_metadata(prompt).await {
            Ok(song) => song,
            Err(err) => {
                let err = StudioError::remote(FlowStage::Composition, err);
                self.fail(StudioState::Idle, &err);
                return Err(err);
            }
        };
        self.state = StudioState::Generating;

        let performance = self.synthesize_performance(&song).await;
        self.song = Some(song);
        match performance {
            Ok(track) => {
                self.generated_track = Some(track);
                self.source_name = self.song.as_ref().map(|song| song.title.clone());
                self.state = StudioState::Playback;
                Ok(())
            }
            Err(err) => {
                self.fail(StudioState::Idle, &err);
                Err(err)
            }
        }
    }

    /// Starts playback of the current take, replacing whatever was playing.
    ///
    /// Producer mode blends the user track unattenuated with the generated
    /// track at the fixed secondary gain; composer mode plays the generated
    /// track alone.
    ///
    /// # Errors
    /// Refused with nothing to play; otherwise propagates controller
    /// failures.
    pub fn play(&mut self) -> StudioResult<()> {
        let mut voices: Vec<(&RawAudioBuffer, f32)> = Vec::new();
        match self.mode {
            StudioMode::Producer => {
                if let Some(track) = &self.user_track {
                    voices.push((track, 1.0));
                }
                if let Some(track) = &self.generated_track {
                    voices.push((track, DEFAULT_SECONDARY_GAIN));
                }
            }
            StudioMode::Composer => {
                if let Some(track) = &self.generated_track {
                    voices.push((track, 1.0));
                }
            }
        }
        if voices.is_empty() {
            return Err(StudioError::state("nothing to play yet"));
        }
        self.controller.play(&voices)
    }

    /// Stops all playback, keeping the rest of the session state.
    pub fn stop(&mut self) {
        self.controller.stop_all();
    }

    /// Renders and names the export for the current session.
    ///
    /// Export failures keep the current state; only the last-error message
    /// is recorded.
    ///
    /// # Errors
    /// The export stage's mixer or encoder failure, including the
    /// no-track-present case.
    pub fn export(&mut self) -> StudioResult<ExportBundle> {
        let rendered = render_export(
            self.user_track.as_ref(),
            self.generated_track.as_ref(),
            self.engine_rate,
        );
        let wav = match rendered {
            Ok(wav) => wav,
            Err(err) => {
                let err = StudioError::audio(FlowStage::Export, err);
                self.last_error = Some(err.user_message());
                return Err(err);
            }
        };

        let file_name = export_file_name(
            self.source_name.as_deref(),
            self.song.as_ref().map(|song| song.title.as_str()),
        );
        log::debug!("export rendered: {file_name} ({} bytes)", wav.wav_data.len());
        Ok(ExportBundle { file_name, wav })
    }

    fn ensure_settled(&self, what: &str) -> StudioResult<()> {
        if self.state.is_busy() {
            return Err(StudioError::state(format!(
                "cannot {what} while {}",
                self.state
            )));
        }
        Ok(())
    }

    fn fail(&mut self, settled: StudioState, err: &StudioError) {
        log::warn!("flow failed ({}): {err}", err.code());
        self.last_error = Some(err.user_message());
        self.state = settled;
    }

    async fn synthesize_backing(&self, analysis: &Analysis) -> StudioResult<RawAudioBuffer> {
        let payload = self
            .synthesis_provider
            .synthesize_backing(analysis)
            .await
            .map_err(|err| StudioError::remote(FlowStage::Backing, err))?;
        decode_base64_pcm(&payload, SYNTH_SAMPLE_RATE_HZ, SYNTH_CHANNELS)
            .map_err(|err| StudioError::audio(FlowStage::Backing, err))
    }

    async fn synthesize_performance(&self, song: &SongMetadata) -> StudioResult<RawAudioBuffer> {
        let payload = self
            .synthesis_provider
            .synthesize_performance(song)
            .await
            .map_err(|err| StudioError::remote(FlowStage::Performance, err))?;
        decode_base64_pcm(&payload, SYNTH_SAMPLE_RATE_HZ, SYNTH_CHANNELS)
            .map_err(|err| StudioError::audio(FlowStage::Performance, err))
    }
}

impl std::fmt::Debug for StudioSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioSession")
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("has_clip", &self.clip.is_some())
            .field("has_user_track", &self.user_track.is_some())
            .field("has_generated_track", &self.generated_track.is_some())
            .finish_non_exhaustive()
    }
}
