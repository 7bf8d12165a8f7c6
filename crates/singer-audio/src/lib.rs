//! Singer Ai Audio Pipeline
//!
//! This crate implements the offline audio pipeline for Singer Ai: decoding
//! synthesized PCM payloads, mixing them with user recordings, and writing
//! canonical WAV files.
//!
//! # Overview
//!
//! Synthesized tracks arrive from the remote service as base64-encoded
//! headerless s16le PCM. The pipeline turns those payloads (and uploaded WAV
//! files) into normalized float buffers, renders up to two sources into a
//! stereo mix at the engine rate, and serializes the result with a fixed
//! 44-byte header and quantization policy:
//!
//! - **PCM decode** - base64 payload to normalized float buffer
//! - **WAV ingest** - user uploads at any common bit depth, via `hound`
//! - **Offline mix** - two-source stereo render with a fixed gain relationship
//! - **WAV encode** - byte-exact serialization for export
//!
//! # Determinism
//!
//! Every stage is pure: the same inputs produce byte-identical output across
//! runs. Encoded files carry a BLAKE3 hash of their PCM payload so exports
//! can be compared by audio content alone.
//!
//! # Example
//!
//! ```ignore
//! use singer_audio::{decode_base64_pcm, MixRequest, OfflineMixer, WavResult};
//!
//! let vocal = decode_base64_pcm(&payload, 24000, 1)?;
//! let mixer = OfflineMixer::new(48000)?;
//! let mix = mixer.mix(&MixRequest::new().with_primary(&vocal))?;
//! let result = WavResult::from_buffer(&mix)?;
//!
//! std::fs::write("song.wav", &result.wav_data)?;
//! println!("PCM hash: {}", result.pcm_hash);
//! ```
//!
//! # Crate Structure
//!
//! - [`buffer`] - Normalized float buffer shared by all stages
//! - [`pcm`] - Headerless base64 PCM decoder
//! - [`resample`] - Linear sample-rate conversion
//! - [`mixer`] - Two-source offline stereo render
//! - [`wav`] - WAV writer, reader, and PCM hashing

pub mod buffer;
pub mod error;
pub mod mixer;
pub mod pcm;
pub mod resample;
pub mod wav;

// Re-export main types at crate root
pub use buffer::RawAudioBuffer;
pub use error::{AudioError, AudioResult};
pub use mixer::{MixRequest, OfflineMixer, DEFAULT_SECONDARY_GAIN};
pub use pcm::{decode_base64_pcm, decode_pcm16le};
pub use wav::{encode_wav, load_wav, read_wav, WavResult};
