//! Tests for mix request construction.

use pretty_assertions::assert_eq;

use crate::buffer::RawAudioBuffer;

use super::*;

#[test]
fn test_new_request_is_empty() {
    let request = MixRequest::new();
    assert!(request.is_empty());
    assert!(request.sources().is_empty());
    assert_eq!(request.secondary_gain, DEFAULT_SECONDARY_GAIN);
}

#[test]
fn test_default_secondary_gain_value() {
    assert_eq!(DEFAULT_SECONDARY_GAIN, 0.8);
}

#[test]
fn test_builder_fills_slots() {
    let primary = RawAudioBuffer::mono(vec![0.1], 48000).unwrap();
    let secondary = RawAudioBuffer::mono(vec![0.2], 24000).unwrap();

    let request = MixRequest::new()
        .with_primary(&primary)
        .with_secondary(&secondary);

    assert!(!request.is_empty());
    let sources = request.sources();
    assert_eq!(sources.len(), 2);
    // Primary comes first at full gain.
    assert_eq!(sources[0].1, 1.0);
    assert_eq!(sources[1].1, DEFAULT_SECONDARY_GAIN);
}

#[test]
fn test_gain_override() {
    let secondary = RawAudioBuffer::mono(vec![0.2], 24000).unwrap();
    let request = MixRequest::new()
        .with_secondary(&secondary)
        .with_secondary_gain(0.5);

    let sources = request.sources();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].1, 0.5);
}

#[test]
fn test_single_slot_requests() {
    let buffer = RawAudioBuffer::mono(vec![0.1], 48000).unwrap();

    let primary_only = MixRequest::new().with_primary(&buffer);
    assert_eq!(primary_only.sources().len(), 1);
    assert_eq!(primary_only.sources()[0].1, 1.0);

    let secondary_only = MixRequest::new().with_secondary(&buffer);
    assert_eq!(secondary_only.sources().len(), 1);
    assert_eq!(secondary_only.sources()[0].1, DEFAULT_SECONDARY_GAIN);
}
