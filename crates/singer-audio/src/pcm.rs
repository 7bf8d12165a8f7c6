//! Headerless PCM payload decoder.
//!
//! The synthesis service returns raw signed 16-bit little-endian PCM with no
//! container, base64-encoded for transport. This module reconstructs a
//! [`RawAudioBuffer`] from that payload. Decoding is pure: no I/O, no audio
//! subsystem, fully unit-testable.

use base64::Engine;

use crate::buffer::RawAudioBuffer;
use crate::error::{AudioError, AudioResult};

/// Decodes a base64-encoded headerless s16le PCM payload.
///
/// The sample rate and channel count are protocol knowledge supplied by the
/// caller; nothing is inferred from the payload itself.
///
/// # Errors
/// Returns a decode error if the payload is not valid base64.
pub fn decode_base64_pcm(
    payload: &str,
    sample_rate: u32,
    channel_count: usize,
) -> AudioResult<RawAudioBuffer> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| AudioError::decode(format!("invalid base64 payload: {e}")))?;
    decode_pcm16le(&bytes, sample_rate, channel_count)
}

/// Decodes raw s16le PCM bytes into a normalized float buffer.
///
/// Each sample is rebuilt from two consecutive bytes (low, then high) and
/// normalized by 1/32768. A trailing odd byte carries no complete sample and
/// is dropped; likewise any trailing samples short of a full frame. The
/// resulting frame count is `floor(byte_len / 2 / channel_count)`.
pub fn decode_pcm16le(
    bytes: &[u8],
    sample_rate: u32,
    channel_count: usize,
) -> AudioResult<RawAudioBuffer> {
    if channel_count == 0 {
        return Err(AudioError::invalid_buffer(
            "channel count must be at least 1",
        ));
    }

    let sample_count = bytes.len() / 2;
    let frame_count = sample_count / channel_count;

    let mut channels = vec![Vec::with_capacity(frame_count); channel_count];
    for frame in 0..frame_count {
        for (ch, samples) in channels.iter_mut().enumerate() {
            let at = (frame * channel_count + ch) * 2;
            let value = i16::from_le_bytes([bytes[at], bytes[at + 1]]);
            samples.push(value as f32 / 32768.0);
        }
    }

    RawAudioBuffer::new(channels, sample_rate)
}
