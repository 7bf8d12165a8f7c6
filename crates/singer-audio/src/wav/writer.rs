//! WAV serialization with the fixed quantization policy.

use std::io::{self, Write};

use crate::buffer::RawAudioBuffer;
use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;

/// Quantizes one normalized sample to a signed 16-bit value.
///
/// Clamp to [-1.0, 1.0], then scale: values below -0.5 by 32768, all others
/// by 32767, truncating toward zero. The split scale reaches both i16
/// extremes (-32768 and 32767) and is a byte-level contract; the constants
/// must not be changed.
pub fn quantize_sample(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    let scaled = if 0.5 + clamped < 0.0 {
        clamped * 32768.0
    } else {
        clamped * 32767.0
    };
    scaled as i16
}

/// Quantizes and interleaves a buffer frame-by-frame into s16le PCM bytes.
///
/// All channels of frame 0 come first, then frame 1, and so on.
pub fn pcm16_bytes(buffer: &RawAudioBuffer) -> Vec<u8> {
    let frame_count = buffer.frame_count();
    let channels = buffer.channels();
    let mut pcm = Vec::with_capacity(frame_count * channels.len() * 2);

    for frame in 0..frame_count {
        for channel in channels {
            pcm.extend_from_slice(&quantize_sample(channel[frame]).to_le_bytes());
        }
    }

    pcm
}

/// Writes a complete WAV file for the buffer.
///
/// Output is exactly `44 + frame_count * channel_count * 2` bytes.
///
/// # Errors
/// Returns an encode error when the buffer holds no frames; callers guard
/// against an absent buffer before calling.
pub fn write_wav<W: Write>(writer: &mut W, buffer: &RawAudioBuffer) -> AudioResult<()> {
    if buffer.is_empty() {
        return Err(AudioError::encode("buffer contains no frames"));
    }

    let format = WavFormat::from_buffer(buffer);
    let pcm = pcm16_bytes(buffer);
    write_header(writer, &format, pcm.len() as u32)?;
    writer.write_all(&pcm)?;
    Ok(())
}

/// Encodes the buffer into an in-memory WAV file.
pub fn encode_wav(buffer: &RawAudioBuffer) -> AudioResult<Vec<u8>> {
    let mut out = Vec::with_capacity(44 + buffer.frame_count() * buffer.channel_count() * 2);
    write_wav(&mut out, buffer)?;
    Ok(out)
}

fn write_header<W: Write>(writer: &mut W, format: &WavFormat, data_size: u32) -> io::Result<()> {
    // Total file size minus the 8-byte RIFF preamble
    let file_size = 36 + data_size;

    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // fmt chunk size for PCM
    writer.write_all(&1u16.to_le_bytes())?; // format tag 1 = PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    Ok(())
}
