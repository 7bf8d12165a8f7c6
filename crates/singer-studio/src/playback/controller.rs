//! The playback controller: one context, one session.

use singer_audio::RawAudioBuffer;

use crate::error::StudioResult;

use super::context::{ContextState, PlaybackContext};
use super::sink::{AudioBackend, VoiceId};

/// The single active playback session.
///
/// Idle is the empty voice set. Replacing hands back the previous voices
/// so the controller can tear them down.
#[derive(Debug, Default)]
struct PlaybackSession {
    voices: Vec<VoiceId>,
}

impl PlaybackSession {
    fn is_playing(&self) -> bool {
        !self.voices.is_empty()
    }

    /// Ends the session, returning the voices that were playing.
    fn take(&mut self) -> Vec<VoiceId> {
        std::mem::take(&mut self.voices)
    }

    /// Installs a new voice set, returning the previous one.
    fn replace(&mut self, voices: Vec<VoiceId>) -> Vec<VoiceId> {
        std::mem::replace(&mut self.voices, voices)
    }
}

/// Owns the processing context, the backend, and the one active session.
///
/// Starting a new session implicitly ends the previous one; no session
/// handle is ever returned to the caller.
pub struct PlaybackController {
    backend: Box<dyn AudioBackend>,
    context: PlaybackContext,
    session: PlaybackSession,
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("context", &self.context)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl PlaybackController {
    /// Creates a controller over the given backend.
    pub fn new(backend: impl AudioBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            context: PlaybackContext::new(),
            session: PlaybackSession::default(),
        }
    }

    /// Replaces the active session with one voice per buffer.
    ///
    /// The context is re-validated first, the previous session is fully
    /// stopped (stop failures on finished voices are swallowed), and only
    /// then are the new voices started, all at time offset 0 in the same
    /// pass. An empty slice just ends the current session.
    ///
    /// # Errors
    /// Propagates context activation and voice start failures. Voices that
    /// started before a failure stay in the session so `stop_all` can
    /// reach them.
    pub fn play(&mut self, voices: &[(&RawAudioBuffer, f32)]) -> StudioResult<()> {
        self.context.ensure_active(self.backend.as_mut())?;
        self.stop_all();

        let mut started = Vec::with_capacity(voices.len());
        for (buffer, gain) in voices {
            match self.backend.start_voice(buffer, *gain) {
                Ok(voice) => started.push(voice),
                Err(err) => {
                    self.session.replace(started);
                    return Err(err);
                }
            }
        }
        log::debug!("session started with {} voice(s)", started.len());
        self.session.replace(started);
        Ok(())
    }

    /// Ends the active session, stopping every voice.
    ///
    /// Idempotent; fine to call with no session playing. Stop failures on
    /// already-finished voices are swallowed.
    pub fn stop_all(&mut self) {
        for voice in self.session.take() {
            if let Err(err) = self.backend.stop_voice(voice) {
                log::debug!("ignoring stop failure for finished {voice}: {err}");
            }
        }
    }

    /// True while the session holds started voices.
    pub fn is_playing(&self) -> bool {
        self.session.is_playing()
    }

    /// Number of voices in the active session.
    pub fn voice_count(&self) -> usize {
        self.session.voices.len()
    }

    /// Lifecycle state of the owned context.
    pub fn context_state(&self) -> ContextState {
        self.context.state()
    }

    /// Records an outside suspension of the context.
    pub fn mark_suspended(&mut self) {
        self.context.mark_suspended();
    }
}
