//! The normalized floating-point audio buffer shared by the whole pipeline.

use crate::error::{AudioError, AudioResult};

/// A decoded audio buffer: one sample vector per channel, samples normalized
/// to [-1.0, 1.0].
///
/// Buffers are immutable once constructed. Every transformation in the
/// pipeline (resampling, mixing) produces a new buffer; nothing mutates the
/// channel data in place. Invariant: all channels hold exactly
/// `frame_count()` samples, enforced by the constructors.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAudioBuffer {
    channels: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl RawAudioBuffer {
    /// Creates a buffer from per-channel sample vectors.
    ///
    /// # Errors
    /// Returns an error if `channels` is empty, the channel lengths differ,
    /// or `sample_rate` is zero.
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> AudioResult<Self> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }
        let first_len = match channels.first() {
            Some(first) => first.len(),
            None => {
                return Err(AudioError::invalid_buffer(
                    "buffer must have at least one channel",
                ))
            }
        };
        if let Some(bad) = channels.iter().position(|ch| ch.len() != first_len) {
            return Err(AudioError::invalid_buffer(format!(
                "channel {} has {} frames, expected {}",
                bad,
                channels[bad].len(),
                first_len
            )));
        }

        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Creates a mono buffer.
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> AudioResult<Self> {
        Self::new(vec![samples], sample_rate)
    }

    /// Creates a stereo buffer from separate left/right channels.
    pub fn stereo(left: Vec<f32>, right: Vec<f32>, sample_rate: u32) -> AudioResult<Self> {
        Self::new(vec![left, right], sample_rate)
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels (at least 1).
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn frame_count(&self) -> usize {
        self.channels[0].len()
    }

    /// Returns true if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    /// Samples for one channel.
    ///
    /// # Panics
    /// Panics if `index` is out of range; use [`channel_count`] to check.
    ///
    /// [`channel_count`]: Self::channel_count
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }

    /// All channels, outer index = channel.
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Buffer duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }
}
