//! Real audio output through cpal, one stream per voice.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};

use singer_audio::resample::resample_linear;
use singer_audio::RawAudioBuffer;

use crate::error::{StudioError, StudioResult};

use super::sink::{AudioBackend, VoiceId};

/// Output backend over the system's default audio device.
///
/// Each voice renders its buffer to the device rate and channel count up
/// front and plays through its own output stream; dropping the stream stops
/// the voice. A voice plays once and then emits silence until stopped.
pub struct CpalBackend {
    device: cpal::Device,
    config: StreamConfig,
    streams: HashMap<VoiceId, Stream>,
    next_voice: u64,
}

impl CpalBackend {
    /// Opens the default output device.
    ///
    /// # Errors
    /// Fails when no output device is available, the device refuses its
    /// default configuration, or the output format is not f32.
    pub fn new() -> StudioResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| StudioError::playback("no audio output device available"))?;
        let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());

        let supported = device.default_output_config().map_err(|err| {
            StudioError::playback(format!("no output config for {device_name}: {err}"))
        })?;
        if supported.sample_format() != SampleFormat::F32 {
            return Err(StudioError::playback(format!(
                "unsupported output sample format {:?}",
                supported.sample_format()
            )));
        }
        let config = supported.config();

        log::info!("Using audio device: {device_name}");
        log::info!(
            "Output config: {} channels, {}Hz",
            config.channels,
            config.sample_rate.0
        );

        Ok(Self {
            device,
            config,
            streams: HashMap::new(),
            next_voice: 0,
        })
    }

    /// Renders a buffer to interleaved device-rate samples with gain applied.
    ///
    /// Mono sources are duplicated across the device channels; extra device
    /// channels repeat the last source channel.
    fn render_voice(&self, buffer: &RawAudioBuffer, gain: f32) -> Vec<f32> {
        let channels = self.config.channels as usize;
        let device_rate = self.config.sample_rate.0;

        let rendered: Vec<Vec<f32>> = buffer
            .channels()
            .iter()
            .map(|samples| resample_linear(samples, buffer.sample_rate(), device_rate))
            .collect();
        let frame_count = rendered.first().map(Vec::len).unwrap_or(0);
        let last = rendered.len().saturating_sub(1);

        let mut interleaved = vec![0.0f32; frame_count * channels];
        for (frame, slot) in interleaved.chunks_mut(channels).enumerate() {
            for (channel, out) in slot.iter_mut().enumerate() {
                *out = rendered[channel.min(last)][frame] * gain;
            }
        }
        interleaved
    }
}

impl AudioBackend for CpalBackend {
    fn activate(&mut self) -> StudioResult<()> {
        // Device and config are opened in `new`; nothing further to bring up.
        log::debug!("audio device backend active");
        Ok(())
    }

    fn resume(&mut self) -> StudioResult<()> {
        for stream in self.streams.values() {
            stream
                .play()
                .map_err(|err| StudioError::playback(format!("resume failed: {err}")))?;
        }
        Ok(())
    }

    fn start_voice(&mut self, buffer: &RawAudioBuffer, gain: f32) -> StudioResult<VoiceId> {
        let samples = Arc::new(self.render_voice(buffer, gain));
        let cursor = Arc::new(AtomicUsize::new(0));

        let voice = VoiceId::new(self.next_voice);
        self.next_voice += 1;

        let stream = self
            .device
            .build_output_stream(
                &self.config,
                {
                    let samples = Arc::clone(&samples);
                    let cursor = Arc::clone(&cursor);
                    move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| {
                        let start = cursor.fetch_add(data.len(), Ordering::Relaxed);
                        for (i, out) in data.iter_mut().enumerate() {
                            *out = samples.get(start + i).copied().unwrap_or(0.0);
                        }
                    }
                },
                move |err| {
                    log::error!("Audio stream error: {err}");
                },
                None,
            )
            .map_err(|err| StudioError::playback(format!("cannot open output stream: {err}")))?;

        stream
            .play()
            .map_err(|err| StudioError::playback(format!("cannot start output stream: {err}")))?;

        log::debug!(
            "{voice} started ({} source frames, gain {gain})",
            buffer.frame_count()
        );
        self.streams.insert(voice, stream);
        Ok(voice)
    }

    fn stop_voice(&mut self, voice: VoiceId) -> StudioResult<()> {
        match self.streams.remove(&voice) {
            Some(stream) => {
                drop(stream);
                Ok(())
            }
            None => Err(StudioError::playback(format!("{voice} already stopped"))),
        }
    }
}
