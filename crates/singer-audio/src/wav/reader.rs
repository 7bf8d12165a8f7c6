//! WAV ingest for user-supplied tracks.
//!
//! Uploaded clips arrive as ordinary WAV files in whatever shape the user's
//! recorder produced. `hound` handles the container; samples are normalized
//! to f32 channels at the file's native rate. Integer PCM at 8, 16, 24, and
//! 32 bits plus IEEE float are accepted.

use std::io::{Cursor, Read};
use std::path::Path;

use crate::buffer::RawAudioBuffer;
use crate::error::{AudioError, AudioResult};

/// Loads a WAV file from disk.
pub fn load_wav(path: &Path) -> AudioResult<RawAudioBuffer> {
    let reader = hound::WavReader::open(path).map_err(map_hound)?;
    let buffer = read_samples(reader)?;
    log::debug!(
        "loaded '{}': {} Hz, {} channel(s), {} frames",
        path.display(),
        buffer.sample_rate(),
        buffer.channel_count(),
        buffer.frame_count()
    );
    Ok(buffer)
}

/// Parses a WAV file held in memory.
pub fn read_wav(bytes: &[u8]) -> AudioResult<RawAudioBuffer> {
    let reader = hound::WavReader::new(Cursor::new(bytes)).map_err(map_hound)?;
    read_samples(reader)
}

fn read_samples<R: Read>(mut reader: hound::WavReader<R>) -> AudioResult<RawAudioBuffer> {
    let spec = reader.spec();

    let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(map_hound)?,
        (hound::SampleFormat::Int, 8) => collect_int::<i8, R>(&mut reader, 128.0)?,
        (hound::SampleFormat::Int, 16) => collect_int::<i16, R>(&mut reader, 32768.0)?,
        (hound::SampleFormat::Int, 24) => collect_int::<i32, R>(&mut reader, 8_388_608.0)?,
        (hound::SampleFormat::Int, 32) => collect_int::<i32, R>(&mut reader, 2_147_483_648.0)?,
        (format, bits) => {
            return Err(AudioError::unsupported_wav(format!(
                "unsupported sample format: {format:?} at {bits} bits"
            )))
        }
    };

    let channels = deinterleave(&interleaved, spec.channels as usize);
    RawAudioBuffer::new(channels, spec.sample_rate)
}

fn collect_int<S, R>(reader: &mut hound::WavReader<R>, full_scale: f64) -> AudioResult<Vec<f32>>
where
    S: hound::Sample + Into<i32>,
    R: Read,
{
    reader
        .samples::<S>()
        .map(|s| {
            s.map(|v| (v.into() as f64 / full_scale) as f32)
                .map_err(map_hound)
        })
        .collect()
}

fn deinterleave(samples: &[f32], channel_count: usize) -> Vec<Vec<f32>> {
    if channel_count == 0 {
        return Vec::new();
    }
    let frame_count = samples.len() / channel_count;
    let mut channels = vec![Vec::with_capacity(frame_count); channel_count];
    for frame in 0..frame_count {
        for (ch, out) in channels.iter_mut().enumerate() {
            out.push(samples[frame * channel_count + ch]);
        }
    }
    channels
}

fn map_hound(err: hound::Error) -> AudioError {
    match err {
        hound::Error::IoError(e) => AudioError::Io(e),
        other => AudioError::unsupported_wav(other.to_string()),
    }
}
