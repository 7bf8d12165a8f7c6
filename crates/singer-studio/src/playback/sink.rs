//! The device seam: backends that turn buffers into audible voices.

use std::sync::{Arc, Mutex};

use singer_audio::RawAudioBuffer;

use crate::error::{StudioError, StudioResult};

/// Identifier for one playing voice inside a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceId(u64);

impl VoiceId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "voice-{}", self.0)
    }
}

/// Turns buffers into running voices, one gain stage per voice.
///
/// Implementations own their voice lifetimes: a started voice plays once
/// from time offset 0 and is discarded on stop. The trait is deliberately
/// not `Send`; device streams are thread-bound and the controller owns its
/// backend on a single thread.
pub trait AudioBackend {
    /// Brings the backend up for first use.
    fn activate(&mut self) -> StudioResult<()>;

    /// Resumes after an outside suspension.
    fn resume(&mut self) -> StudioResult<()>;

    /// Starts one voice at time offset 0 with a linear gain.
    fn start_voice(&mut self, buffer: &RawAudioBuffer, gain: f32) -> StudioResult<VoiceId>;

    /// Stops a voice.
    ///
    /// Stopping a voice that already finished may fail; session replacement
    /// treats such failures as routine.
    fn stop_voice(&mut self, voice: VoiceId) -> StudioResult<()>;
}

#[derive(Debug, Default)]
struct MemoryState {
    next_voice: u64,
    active: Vec<VoiceId>,
    events: Vec<String>,
}

/// In-memory backend that records start/stop order instead of making sound.
///
/// Clones share state, so a caller can keep a probe handle while the
/// controller owns the boxed backend. Also serves sessions that never play
/// anything, such as the non-interactive export flows.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Voices currently playing, in start order.
    pub fn active_voices(&self) -> Vec<VoiceId> {
        self.state.lock().unwrap().active.clone()
    }

    /// Every lifecycle event seen so far, in order.
    pub fn events(&self) -> Vec<String> {
        self.state.lock().unwrap().events.clone()
    }
}

impl AudioBackend for MemoryBackend {
    fn activate(&mut self) -> StudioResult<()> {
        self.state.lock().unwrap().events.push("activate".to_string());
        Ok(())
    }

    fn resume(&mut self) -> StudioResult<()> {
        self.state.lock().unwrap().events.push("resume".to_string());
        Ok(())
    }

    fn start_voice(&mut self, buffer: &RawAudioBuffer, gain: f32) -> StudioResult<VoiceId> {
        let mut state = self.state.lock().unwrap();
        let voice = VoiceId::new(state.next_voice);
        state.next_voice += 1;
        state.active.push(voice);
        state.events.push(format!(
            "start {voice} frames={} gain={gain}",
            buffer.frame_count()
        ));
        Ok(voice)
    }

    fn stop_voice(&mut self, voice: VoiceId) -> StudioResult<()> {
        let mut state = self.state.lock().unwrap();
        let Some(index) = state.active.iter().position(|v| *v == voice) else {
            return Err(StudioError::playback(format!("{voice} already stopped")));
        };
        state.active.remove(index);
        state.events.push(format!("stop {voice}"));
        Ok(())
    }
}
