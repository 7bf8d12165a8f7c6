use std::sync::Arc;

use pretty_assertions::assert_eq;
use singer_remote::CannedProvider;

use super::*;
use crate::playback::{MemoryBackend, PlaybackController};
use crate::state::{StudioMode, StudioState};

fn composer_studio(provider: CannedProvider) -> (StudioSession, Arc<CannedProvider>, MemoryBackend) {
    let probe = MemoryBackend::new();
    let controller = PlaybackController::new(probe.clone());
    let provider = Arc::new(provider);
    let mut session = StudioSession::new(provider.clone(), provider.clone(), controller);
    session.set_mode(StudioMode::Composer).unwrap();
    (session, provider, probe)
}

// ============================================================
// Compose flow
// ============================================================

#[tokio::test]
async fn test_compose_settles_playback_ready() {
    let (mut session, provider, _probe) = composer_studio(CannedProvider::new());

    session
        .compose("a dreamy synth ballad about radio static")
        .await
        .unwrap();

    assert_eq!(session.state(), StudioState::Playback);
    assert_eq!(session.song().unwrap().title, "Static Bloom");
    assert_eq!(session.source_name(), Some("Static Bloom"));
    assert_eq!(session.last_error(), None);

    let generated = session.generated_track().unwrap();
    assert_eq!(generated.sample_rate(), 24_000);
    assert_eq!(generated.channel_count(), 1);
    assert_eq!(generated.frame_count(), 4800);

    assert_eq!(
        provider.calls(),
        vec!["compose_metadata", "synthesize_performance"]
    );
}

#[tokio::test]
async fn test_empty_prompt_rejected_before_any_call() {
    let (mut session, provider, _probe) = composer_studio(CannedProvider::new());

    let err = session.compose("   \n  ").await.unwrap_err();
    assert_eq!(err.user_message(), "Please enter a song description.");
    assert_eq!(session.last_error(), Some("Please enter a song description."));
    assert_eq!(session.state(), StudioState::Idle);
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_metadata_failure_settles_idle() {
    let (mut session, provider, _probe) = composer_studio(CannedProvider::new().fail_metadata());

    let err = session.compose("moody piano piece").await.unwrap_err();
    assert_eq!(err.code(), "STUDIO_002");
    assert_eq!(session.state(), StudioState::Idle);
    assert_eq!(
        session.last_error(),
        Some("Failed to compose song. Try a different prompt.")
    );
    assert!(session.song().is_none());
    assert_eq!(provider.calls(), vec!["compose_metadata"]);
}

#[tokio::test]
async fn test_performance_failure_keeps_song_and_settles_idle() {
    let (mut session, provider, _probe) = composer_studio(CannedProvider::new().fail_performance());

    let err = session.compose("moody piano piece").await.unwrap_err();
    assert_eq!(err.code(), "STUDIO_002");
    assert_eq!(session.state(), StudioState::Idle);
    assert_eq!(
        session.last_error(),
        Some("Failed to compose song. Try a different prompt.")
    );

    // The composed metadata survives even though no audio was produced.
    assert!(session.song().is_some());
    assert!(session.generated_track().is_none());
    assert_eq!(
        provider.calls(),
        vec!["compose_metadata", "synthesize_performance"]
    );
}

#[tokio::test]
async fn test_performance_decode_failure_settles_idle() {
    let provider = CannedProvider::new().with_performance_payload("%%%");
    let (mut session, _provider, _probe) = composer_studio(provider);

    let err = session.compose("moody piano piece").await.unwrap_err();
    assert_eq!(err.code(), "STUDIO_003");
    assert_eq!(session.state(), StudioState::Idle);
    assert_eq!(
        session.last_error(),
        Some("Failed to compose song. Try a different prompt.")
    );
}

// ============================================================
// Playback and export
// ============================================================

#[tokio::test]
async fn test_composer_playback_plays_generated_alone() {
    let (mut session, _provider, probe) = composer_studio(CannedProvider::new());
    session.compose("upbeat folk tune").await.unwrap();

    session.play().unwrap();

    assert_eq!(
        probe.events(),
        vec!["activate", "start voice-0 frames=4800 gain=1"]
    );
}

#[tokio::test]
async fn test_composer_export_keeps_native_format() {
    let (mut session, _provider, _probe) = composer_studio(CannedProvider::new());
    session.compose("upbeat folk tune").await.unwrap();

    let bundle = session.export().unwrap();
    assert_eq!(bundle.file_name, "Singer_Ai_Static Bloom.wav");
    assert_eq!(bundle.wav.channel_count, 1);
    assert_eq!(bundle.wav.sample_rate, 24_000);
    assert_eq!(bundle.wav.frame_count, 4800);
}
