use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use singer_audio::RawAudioBuffer;

use super::*;
use crate::error::{StudioError, StudioResult};

fn tone(frames: usize) -> RawAudioBuffer {
    RawAudioBuffer::mono(vec![0.25; frames], 48_000).unwrap()
}

// ============================================================
// Session lifecycle
// ============================================================

#[test]
fn test_play_activates_and_starts_voices() {
    let probe = MemoryBackend::new();
    let mut controller = PlaybackController::new(probe.clone());

    let user = tone(100);
    let generated = tone(80);
    controller
        .play(&[(&user, 1.0), (&generated, 0.8)])
        .unwrap();

    assert!(controller.is_playing());
    assert_eq!(controller.voice_count(), 2);
    assert_eq!(controller.context_state(), ContextState::Active);
    assert_eq!(
        probe.events(),
        vec![
            "activate",
            "start voice-0 frames=100 gain=1",
            "start voice-1 frames=80 gain=0.8",
        ]
    );
}

#[test]
fn test_second_play_replaces_first_session() {
    let probe = MemoryBackend::new();
    let mut controller = PlaybackController::new(probe.clone());

    let first = tone(10);
    controller.play(&[(&first, 1.0), (&first, 0.8)]).unwrap();
    let first_voices = probe.active_voices();
    assert_eq!(first_voices.len(), 2);

    let second = tone(20);
    controller.play(&[(&second, 1.0)]).unwrap();

    // Exactly one active voice set remains, and it is the new one.
    let active = probe.active_voices();
    assert_eq!(active.len(), 1);
    assert!(first_voices.iter().all(|v| !active.contains(v)));
    assert_eq!(controller.voice_count(), 1);

    // The first session was fully stopped before the new voices started.
    let events = probe.events();
    let last_stop = events.iter().rposition(|e| e.starts_with("stop")).unwrap();
    let second_start = events
        .iter()
        .rposition(|e| e.starts_with("start"))
        .unwrap();
    assert!(last_stop < second_start, "events: {events:?}");
}

#[test]
fn test_stop_all_is_idempotent() {
    let probe = MemoryBackend::new();
    let mut controller = PlaybackController::new(probe.clone());

    // Nothing playing yet: a no-op.
    controller.stop_all();
    assert!(!controller.is_playing());

    let buffer = tone(5);
    controller.play(&[(&buffer, 1.0)]).unwrap();
    controller.stop_all();
    controller.stop_all();

    assert!(!controller.is_playing());
    assert!(probe.active_voices().is_empty());
}

#[test]
fn test_empty_play_just_ends_the_session() {
    let probe = MemoryBackend::new();
    let mut controller = PlaybackController::new(probe.clone());

    let buffer = tone(5);
    controller.play(&[(&buffer, 1.0)]).unwrap();
    controller.play(&[]).unwrap();

    assert!(!controller.is_playing());
    assert!(probe.active_voices().is_empty());
}

// ============================================================
// Context revalidation
// ============================================================

#[test]
fn test_suspension_is_resumed_on_next_play() {
    let probe = MemoryBackend::new();
    let mut controller = PlaybackController::new(probe.clone());

    let buffer = tone(5);
    controller.play(&[(&buffer, 1.0)]).unwrap();
    controller.mark_suspended();
    assert_eq!(controller.context_state(), ContextState::Suspended);

    controller.play(&[(&buffer, 1.0)]).unwrap();
    assert_eq!(controller.context_state(), ContextState::Active);

    let events = probe.events();
    assert!(events.contains(&"resume".to_string()), "events: {events:?}");
}

// ============================================================
// Failure paths
// ============================================================

/// Backend whose stop always fails, as a finished device stream would.
#[derive(Clone, Default)]
struct FlakyStop {
    next_voice: Arc<Mutex<u64>>,
    failed_stops: Arc<Mutex<u32>>,
}

impl AudioBackend for FlakyStop {
    fn activate(&mut self) -> StudioResult<()> {
        Ok(())
    }

    fn resume(&mut self) -> StudioResult<()> {
        Ok(())
    }

    fn start_voice(&mut self, _: &RawAudioBuffer, _: f32) -> StudioResult<VoiceId> {
        let mut next = self.next_voice.lock().unwrap();
        let voice = VoiceId::new(*next);
        *next += 1;
        Ok(voice)
    }

    fn stop_voice(&mut self, _: VoiceId) -> StudioResult<()> {
        *self.failed_stops.lock().unwrap() += 1;
        Err(StudioError::playback("stream already closed"))
    }
}

#[test]
fn test_stop_failures_are_swallowed() {
    let backend = FlakyStop::default();
    let failed_stops = backend.failed_stops.clone();
    let mut controller = PlaybackController::new(backend);

    let buffer = tone(5);
    controller.play(&[(&buffer, 1.0)]).unwrap();
    controller.play(&[(&buffer, 1.0)]).unwrap();
    assert_eq!(*failed_stops.lock().unwrap(), 1);

    // stop_all swallows too and still empties the session.
    controller.stop_all();
    assert_eq!(*failed_stops.lock().unwrap(), 2);
    assert!(!controller.is_playing());
}

/// Backend that refuses every start after the first.
#[derive(Clone, Default)]
struct OneVoiceOnly {
    inner: MemoryBackend,
    started: Arc<Mutex<u32>>,
}

impl AudioBackend for OneVoiceOnly {
    fn activate(&mut self) -> StudioResult<()> {
        self.inner.activate()
    }

    fn resume(&mut self) -> StudioResult<()> {
        self.inner.resume()
    }

    fn start_voice(&mut self, buffer: &RawAudioBuffer, gain: f32) -> StudioResult<VoiceId> {
        let mut started = self.started.lock().unwrap();
        if *started >= 1 {
            return Err(StudioError::playback("out of voices"));
        }
        *started += 1;
        self.inner.start_voice(buffer, gain)
    }

    fn stop_voice(&mut self, voice: VoiceId) -> StudioResult<()> {
        self.inner.stop_voice(voice)
    }
}

#[test]
fn test_partial_start_stays_stoppable() {
    let backend = OneVoiceOnly::default();
    let probe = backend.inner.clone();
    let mut controller = PlaybackController::new(backend);

    let buffer = tone(5);
    let err = controller.play(&[(&buffer, 1.0), (&buffer, 0.8)]).unwrap_err();
    assert_eq!(err.code(), "STUDIO_004");

    // The voice that made it in is still owned by the session.
    assert_eq!(controller.voice_count(), 1);
    controller.stop_all();
    assert!(probe.active_voices().is_empty());
}
