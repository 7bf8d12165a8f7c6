//! Byte-exact WAV serialization and WAV ingest.
//!
//! The writer produces a canonical 44-byte RIFF/WAVE header followed by
//! interleaved 16-bit PCM, with a fixed clamping/quantization policy whose
//! byte output downstream consumers rely on. The reader side ingests
//! user-supplied WAV files through `hound`; the raw chunk walker exists so
//! tests and hashing can compare files by audio content alone.

mod format;
mod pcm;
mod reader;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use reader::{load_wav, read_wav};
pub use result::WavResult;
pub use writer::{encode_wav, pcm16_bytes, quantize_sample, write_wav};
