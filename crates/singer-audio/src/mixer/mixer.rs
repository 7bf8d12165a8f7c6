//! Offline renderer for combining the performance and backing sources.

use crate::buffer::RawAudioBuffer;
use crate::error::{AudioError, AudioResult};
use crate::resample::resample_linear;

use super::types::MixRequest;

/// Renders mix requests to a fixed-rate stereo buffer.
///
/// Each source is resampled to the engine rate, scaled by its gain, and
/// summed. The output length is the longest resampled source; shorter sources
/// fall silent at their end. Summing applies no clip protection, matching the
/// downstream quantizer which clamps per sample.
#[derive(Debug, Clone, Copy)]
pub struct OfflineMixer {
    /// Engine sample rate in Hz.
    sample_rate: u32,
}

impl OfflineMixer {
    /// Creates a mixer rendering at `sample_rate`.
    ///
    /// # Errors
    /// Returns an error if `sample_rate` is zero.
    pub fn new(sample_rate: u32) -> AudioResult<Self> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self { sample_rate })
    }

    /// Engine sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Renders the request to a stereo buffer at the engine rate.
    ///
    /// A source already at the engine rate passes through untouched, so a
    /// lone primary renders bit-identically to its input with the mono case
    /// duplicated onto both channels.
    ///
    /// # Errors
    /// Returns a mix error when the request holds no sources.
    pub fn mix(&self, request: &MixRequest<'_>) -> AudioResult<RawAudioBuffer> {
        if request.is_empty() {
            return Err(AudioError::mix("request holds no sources"));
        }

        let rendered: Vec<(Vec<Vec<f32>>, f32)> = request
            .sources()
            .into_iter()
            .map(|(source, gain)| (self.resample_source(source), gain))
            .collect();

        let frame_count = rendered
            .iter()
            .map(|(channels, _)| channels[0].len())
            .max()
            .unwrap_or(0);

        let mut left = vec![0.0f32; frame_count];
        let mut right = vec![0.0f32; frame_count];

        for (channels, gain) in &rendered {
            // Mono sources land on both channels; stereo maps L to L, R to R.
            let last = channels.len() - 1;
            for (out_ch, out) in [&mut left, &mut right].into_iter().enumerate() {
                let src = &channels[out_ch.min(last)];
                for (out_sample, &sample) in out.iter_mut().zip(src.iter()) {
                    *out_sample += sample * gain;
                }
            }
        }

        RawAudioBuffer::stereo(left, right, self.sample_rate)
    }

    fn resample_source(&self, source: &RawAudioBuffer) -> Vec<Vec<f32>> {
        source
            .channels()
            .iter()
            .map(|samples| resample_linear(samples, source.sample_rate(), self.sample_rate))
            .collect()
    }
}
