//! WAV encoding result type.

use crate::buffer::RawAudioBuffer;
use crate::error::AudioResult;

use super::format::WavFormat;
use super::writer::{pcm16_bytes, write_wav};

/// A finished WAV encode plus the PCM digest used for regression checks.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the quantized PCM payload (header excluded).
    pub pcm_hash: String,
    /// Number of channels.
    pub channel_count: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Frames per channel.
    pub frame_count: usize,
}

impl WavResult {
    /// Encodes a buffer and captures its PCM hash.
    ///
    /// # Errors
    /// Propagates the encoder's empty-buffer error.
    pub fn from_buffer(buffer: &RawAudioBuffer) -> AudioResult<Self> {
        let format = WavFormat::from_buffer(buffer);
        let pcm = pcm16_bytes(buffer);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();

        let mut wav_data = Vec::with_capacity(44 + pcm.len());
        write_wav(&mut wav_data, buffer)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            channel_count: format.channels,
            sample_rate: format.sample_rate,
            frame_count: buffer.frame_count(),
        })
    }

    /// Duration of the encoded audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count as f64 / self.sample_rate as f64
    }
}
