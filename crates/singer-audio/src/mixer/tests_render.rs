//! Tests for offline rendering behavior.

use pretty_assertions::assert_eq;

use crate::buffer::RawAudioBuffer;
use crate::error::AudioError;

use super::*;

const ENGINE_RATE: u32 = 48000;

fn mixer() -> OfflineMixer {
    OfflineMixer::new(ENGINE_RATE).unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_zero_rate_rejected() {
    let err = OfflineMixer::new(0).unwrap_err();
    assert!(matches!(err, AudioError::InvalidSampleRate { rate: 0 }));
}

#[test]
fn test_empty_request_rejected() {
    let err = mixer().mix(&MixRequest::new()).unwrap_err();
    assert!(matches!(err, AudioError::Mix { .. }));
    assert_eq!(err.code(), "AUDIO_003");
}

// ============================================================================
// Passthrough Tests
// ============================================================================

#[test]
fn test_lone_mono_primary_duplicates_bit_exact() {
    // A single source at the engine rate must pass through unchanged, with
    // the mono channel on both outputs.
    let samples = vec![0.1, -0.3, 0.7, -0.9, 0.25];
    let primary = RawAudioBuffer::mono(samples.clone(), ENGINE_RATE).unwrap();

    let out = mixer().mix(&MixRequest::new().with_primary(&primary)).unwrap();

    assert_eq!(out.channel_count(), 2);
    assert_eq!(out.sample_rate(), ENGINE_RATE);
    assert_eq!(out.channel(0), samples.as_slice());
    assert_eq!(out.channel(1), samples.as_slice());
}

#[test]
fn test_lone_stereo_primary_passes_through() {
    let left = vec![0.1, 0.2, 0.3];
    let right = vec![-0.1, -0.2, -0.3];
    let primary = RawAudioBuffer::stereo(left.clone(), right.clone(), ENGINE_RATE).unwrap();

    let out = mixer().mix(&MixRequest::new().with_primary(&primary)).unwrap();

    assert_eq!(out.channel(0), left.as_slice());
    assert_eq!(out.channel(1), right.as_slice());
}

// ============================================================================
// Gain Tests
// ============================================================================

#[test]
fn test_secondary_attenuated_by_default_gain() {
    let primary = RawAudioBuffer::mono(vec![0.5; 100], ENGINE_RATE).unwrap();
    let secondary = RawAudioBuffer::mono(vec![0.5; 100], ENGINE_RATE).unwrap();

    let out = mixer()
        .mix(
            &MixRequest::new()
                .with_primary(&primary)
                .with_secondary(&secondary),
        )
        .unwrap();

    // 0.5 + 0.5 * 0.8 = 0.9 on both channels
    for ch in 0..2 {
        assert!(out.channel(ch).iter().all(|&s| (s - 0.9).abs() < 1e-6));
    }
}

#[test]
fn test_secondary_only_is_scaled() {
    let secondary = RawAudioBuffer::mono(vec![0.5; 50], ENGINE_RATE).unwrap();

    let out = mixer()
        .mix(&MixRequest::new().with_secondary(&secondary))
        .unwrap();

    assert!(out.channel(0).iter().all(|&s| (s - 0.4).abs() < 1e-6));
}

#[test]
fn test_gain_override_applies() {
    let primary = RawAudioBuffer::mono(vec![0.5; 20], ENGINE_RATE).unwrap();
    let secondary = RawAudioBuffer::mono(vec![0.5; 20], ENGINE_RATE).unwrap();

    let out = mixer()
        .mix(
            &MixRequest::new()
                .with_primary(&primary)
                .with_secondary(&secondary)
                .with_secondary_gain(0.5),
        )
        .unwrap();

    assert!(out.channel(0).iter().all(|&s| (s - 0.75).abs() < 1e-6));
}

#[test]
fn test_silent_primary_leaves_scaled_secondary() {
    // With a silent lead the mix is exactly the attenuated backing.
    let primary = RawAudioBuffer::mono(vec![0.0; 64], ENGINE_RATE).unwrap();
    let secondary = RawAudioBuffer::mono(vec![1.0; 64], ENGINE_RATE).unwrap();

    let out = mixer()
        .mix(
            &MixRequest::new()
                .with_primary(&primary)
                .with_secondary(&secondary),
        )
        .unwrap();

    for ch in 0..2 {
        assert!(out.channel(ch).iter().all(|&s| (s - 0.8).abs() < 1e-6));
    }
}

#[test]
fn test_no_clip_protection() {
    // Sums past full scale are preserved; the quantizer clamps later.
    let primary = RawAudioBuffer::mono(vec![0.9; 10], ENGINE_RATE).unwrap();
    let secondary = RawAudioBuffer::mono(vec![0.9; 10], ENGINE_RATE).unwrap();

    let out = mixer()
        .mix(
            &MixRequest::new()
                .with_primary(&primary)
                .with_secondary(&secondary),
        )
        .unwrap();

    let expected = 0.9 + 0.9 * 0.8;
    assert!(expected > 1.0);
    assert!(out.channel(0).iter().all(|&s| (s - expected).abs() < 1e-6));
}

// ============================================================================
// Length and Resampling Tests
// ============================================================================

#[test]
fn test_output_length_is_longest_source() {
    let primary = RawAudioBuffer::mono(vec![0.1; 5000], ENGINE_RATE).unwrap();
    let secondary = RawAudioBuffer::mono(vec![0.1; 8000], ENGINE_RATE).unwrap();

    let out = mixer()
        .mix(
            &MixRequest::new()
                .with_primary(&primary)
                .with_secondary(&secondary),
        )
        .unwrap();

    assert_eq!(out.frame_count(), 8000);
}

#[test]
fn test_output_length_is_longest_resampled_source() {
    // 1000 frames at 24 kHz become 2000 at the engine rate, outlasting the
    // 1500-frame engine-rate secondary.
    let primary = RawAudioBuffer::mono(vec![0.5; 1000], 24000).unwrap();
    let secondary = RawAudioBuffer::mono(vec![0.25; 1500], ENGINE_RATE).unwrap();

    let out = mixer()
        .mix(
            &MixRequest::new()
                .with_primary(&primary)
                .with_secondary(&secondary),
        )
        .unwrap();

    assert_eq!(out.frame_count(), 2000);
    // Both sources overlap at the start.
    assert!((out.channel(0)[100] - (0.5 + 0.25 * 0.8)).abs() < 1e-6);
    // Past the secondary's end only the primary remains.
    assert!((out.channel(0)[1800] - 0.5).abs() < 1e-6);
}

#[test]
fn test_source_resampled_to_engine_rate() {
    let primary = RawAudioBuffer::mono(vec![0.5; 240], 24000).unwrap();

    let out = mixer().mix(&MixRequest::new().with_primary(&primary)).unwrap();

    assert_eq!(out.frame_count(), 480);
    assert_eq!(out.sample_rate(), ENGINE_RATE);
    assert!(out.channel(0).iter().all(|&s| (s - 0.5).abs() < 1e-6));
}

#[test]
fn test_stereo_secondary_keeps_channel_separation() {
    let primary = RawAudioBuffer::mono(vec![0.0; 10], ENGINE_RATE).unwrap();
    let secondary =
        RawAudioBuffer::stereo(vec![0.5; 10], vec![-0.5; 10], ENGINE_RATE).unwrap();

    let out = mixer()
        .mix(
            &MixRequest::new()
                .with_primary(&primary)
                .with_secondary(&secondary),
        )
        .unwrap();

    assert!(out.channel(0).iter().all(|&s| (s - 0.4).abs() < 1e-6));
    assert!(out.channel(1).iter().all(|&s| (s + 0.4).abs() < 1e-6));
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_render_determinism() {
    let primary_samples: Vec<f32> = (0..500).map(|i| ((i as f32) * 0.021).sin()).collect();
    let secondary_samples: Vec<f32> = (0..300).map(|i| ((i as f32) * 0.013).cos()).collect();
    let primary = RawAudioBuffer::mono(primary_samples, 24000).unwrap();
    let secondary = RawAudioBuffer::mono(secondary_samples, 44100).unwrap();

    let request = MixRequest::new()
        .with_primary(&primary)
        .with_secondary(&secondary);

    let a = mixer().mix(&request).unwrap();
    let b = mixer().mix(&request).unwrap();
    assert_eq!(a, b);
}
