use std::sync::Arc;

use pretty_assertions::assert_eq;
use singer_audio::RawAudioBuffer;
use singer_remote::CannedProvider;

use super::*;
use crate::clip::EncodedClip;
use crate::playback::{MemoryBackend, PlaybackController};
use crate::state::{StudioMode, StudioState};

fn studio(provider: CannedProvider) -> (StudioSession, Arc<CannedProvider>, MemoryBackend) {
    let probe = MemoryBackend::new();
    let controller = PlaybackController::new(probe.clone());
    let provider = Arc::new(provider);
    let session = StudioSession::new(provider.clone(), provider.clone(), controller);
    (session, provider, probe)
}

fn vocal_clip() -> EncodedClip {
    EncodedClip::recorded(vec![1, 2, 3, 4])
}

/// 0.1 s of signal at the engine rate, matching the canned backing length.
fn vocal_track() -> RawAudioBuffer {
    RawAudioBuffer::mono(vec![0.25; 4800], 48_000).unwrap()
}

// ============================================================
// Produce flow
// ============================================================

#[tokio::test]
async fn test_produce_settles_playback_ready() {
    let (mut session, provider, _probe) = studio(CannedProvider::new());
    session.attach_track(vocal_clip(), vocal_track()).unwrap();

    session.produce().await.unwrap();

    assert_eq!(session.state(), StudioState::Playback);
    assert_eq!(session.analysis().unwrap().genre, "Electric Pop");
    assert_eq!(session.last_error(), None);

    let generated = session.generated_track().unwrap();
    assert_eq!(generated.sample_rate(), 24_000);
    assert_eq!(generated.channel_count(), 1);
    assert_eq!(generated.frame_count(), 2400);

    // Analysis completes before synthesis is requested.
    assert_eq!(provider.calls(), vec!["analyze", "synthesize_backing"]);
}

#[tokio::test]
async fn test_produce_without_clip_is_refused() {
    let (mut session, provider, _probe) = studio(CannedProvider::new());

    let err = session.produce().await.unwrap_err();
    assert_eq!(err.code(), "STUDIO_005");
    assert_eq!(session.state(), StudioState::Idle);
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_analysis_failure_settles_idle() {
    let (mut session, provider, _probe) = studio(CannedProvider::new().fail_analysis());
    session.attach_track(vocal_clip(), vocal_track()).unwrap();

    let err = session.produce().await.unwrap_err();
    assert_eq!(err.code(), "STUDIO_002");
    assert_eq!(session.state(), StudioState::Idle);
    assert_eq!(
        session.last_error(),
        Some("Failed to analyze audio. Please try again.")
    );
    assert!(session.analysis().is_none());
    assert!(session.generated_track().is_none());

    // Synthesis is never attempted after a failed analysis.
    assert_eq!(provider.calls(), vec!["analyze"]);
}

#[tokio::test]
async fn test_backing_failure_is_partial_success() {
    let (mut session, _provider, _probe) = studio(CannedProvider::new().fail_backing());
    session.attach_track(vocal_clip(), vocal_track()).unwrap();

    session.produce().await.unwrap();

    assert_eq!(session.state(), StudioState::Playback);
    assert!(session.analysis().is_some());
    assert!(session.generated_track().is_none());
    assert_eq!(
        session.last_error(),
        Some("Failed to generate backing track.")
    );
}

#[tokio::test]
async fn test_backing_decode_failure_is_partial_success() {
    let provider = CannedProvider::new().with_backing_payload("@@not-base64@@");
    let (mut session, _provider, _probe) = studio(provider);
    session.attach_track(vocal_clip(), vocal_track()).unwrap();

    session.produce().await.unwrap();

    assert_eq!(session.state(), StudioState::Playback);
    assert!(session.generated_track().is_none());
    assert_eq!(
        session.last_error(),
        Some("Failed to generate backing track.")
    );
}

// ============================================================
// Playback
// ============================================================

#[tokio::test]
async fn test_play_blends_user_and_generated() {
    let (mut session, _provider, probe) = studio(CannedProvider::new());
    session.attach_track(vocal_clip(), vocal_track()).unwrap();
    session.produce().await.unwrap();

    session.play().unwrap();

    // User track first and unattenuated, generated track behind it at 0.8.
    assert_eq!(
        probe.events(),
        vec![
            "activate",
            "start voice-0 frames=4800 gain=1",
            "start voice-1 frames=2400 gain=0.8",
        ]
    );
}

#[tokio::test]
async fn test_replay_leaves_exactly_one_voice_set() {
    let (mut session, _provider, probe) = studio(CannedProvider::new());
    session.attach_track(vocal_clip(), vocal_track()).unwrap();
    session.produce().await.unwrap();

    session.play().unwrap();
    session.play().unwrap();

    // Two voices per play; only the second set survives.
    assert_eq!(probe.active_voices().len(), 2);
    let stops = probe
        .events()
        .iter()
        .filter(|event| event.starts_with("stop"))
        .count();
    assert_eq!(stops, 2);
}

#[test]
fn test_play_with_nothing_is_refused() {
    let (mut session, _provider, _probe) = studio(CannedProvider::new());

    let err = session.play().unwrap_err();
    assert_eq!(err.code(), "STUDIO_005");
}

// ============================================================
// Export
// ============================================================

#[tokio::test]
async fn test_export_mixes_both_tracks() {
    let (mut session, _provider, _probe) = studio(CannedProvider::new());
    session.attach_track(vocal_clip(), vocal_track()).unwrap();
    session.produce().await.unwrap();

    let bundle = session.export().unwrap();
    assert_eq!(bundle.file_name, "Singer_Ai_Vocal Recording.wav");
    assert_eq!(bundle.wav.channel_count, 2);
    assert_eq!(bundle.wav.sample_rate, 48_000);
    assert_eq!(bundle.wav.frame_count, 4800);
}

#[tokio::test]
async fn test_export_after_partial_success_uses_user_track() {
    let (mut session, _provider, _probe) = studio(CannedProvider::new().fail_backing());
    session.attach_track(vocal_clip(), vocal_track()).unwrap();
    session.produce().await.unwrap();

    let bundle = session.export().unwrap();
    assert_eq!(bundle.wav.channel_count, 2);
    assert_eq!(bundle.wav.frame_count, 4800);
}

#[test]
fn test_export_without_tracks_records_error() {
    let (mut session, _provider, _probe) = studio(CannedProvider::new());

    let err = session.export().unwrap_err();
    assert_eq!(err.code(), "STUDIO_003");
    assert_eq!(
        session.last_error(),
        Some("Failed to create download file.")
    );
    // Export failures keep the current state.
    assert_eq!(session.state(), StudioState::Idle);
}

#[tokio::test]
async fn test_upload_name_drives_export_name() {
    let (mut session, _provider, _probe) = studio(CannedProvider::new());
    let clip = EncodedClip::new(vec![9, 9], "audio/wav", "my-take.wav");
    session.attach_track(clip, vocal_track()).unwrap();
    session.produce().await.unwrap();

    let bundle = session.export().unwrap();
    assert_eq!(bundle.file_name, "Singer_Ai_my-take.wav");
}

// ============================================================
// Recording and lifecycle
// ============================================================

#[tokio::test]
async fn test_recording_blocks_flows_and_mode_switches() {
    let (mut session, _provider, _probe) = studio(CannedProvider::new());

    session.begin_recording().unwrap();
    assert_eq!(session.state(), StudioState::Recording);

    let err = session.produce().await.unwrap_err();
    assert_eq!(err.code(), "STUDIO_005");
    let err = session.set_mode(StudioMode::Composer).unwrap_err();
    assert_eq!(err.code(), "STUDIO_005");

    session.finish_recording(vec![1, 2]).unwrap();
    assert_eq!(session.state(), StudioState::Idle);
    assert_eq!(session.source_name(), Some("Vocal Recording"));
}

#[test]
fn test_finish_recording_requires_one_in_progress() {
    let (mut session, _provider, _probe) = studio(CannedProvider::new());

    let err = session.finish_recording(vec![1]).unwrap_err();
    assert_eq!(err.code(), "STUDIO_005");
}

#[tokio::test]
async fn test_reset_clears_everything_and_stops_playback() {
    let (mut session, _provider, probe) = studio(CannedProvider::new());
    session.attach_track(vocal_clip(), vocal_track()).unwrap();
    session.produce().await.unwrap();
    session.play().unwrap();

    session.reset();

    assert!(probe.active_voices().is_empty());
    assert_eq!(session.state(), StudioState::Idle);
    assert!(session.analysis().is_none());
    assert!(session.generated_track().is_none());
    assert!(session.user_track().is_none());
    assert!(session.source_name().is_none());
    assert!(session.last_error().is_none());
}

#[tokio::test]
async fn test_mode_switch_resets_the_session() {
    let (mut session, _provider, _probe) = studio(CannedProvider::new());
    session.attach_track(vocal_clip(), vocal_track()).unwrap();
    session.produce().await.unwrap();
    assert_eq!(session.state(), StudioState::Playback);

    session.set_mode(StudioMode::Composer).unwrap();

    assert_eq!(session.mode(), StudioMode::Composer);
    assert_eq!(session.state(), StudioState::Idle);
    assert!(session.analysis().is_none());
    assert!(session.generated_track().is_none());
}
