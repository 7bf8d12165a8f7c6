//! Raw chunk access and PCM hashing.
//!
//! Comparing WAV files by audio content means skipping the header: two files
//! with identical samples must hash the same regardless of chunk ordering.

/// Extracts the `data` chunk payload from a WAV file.
///
/// Validates the RIFF/WAVE preamble and walks chunks on word boundaries
/// until the `data` chunk is found.
///
/// # Returns
/// The PCM bytes, or `None` if the file is malformed or has no data chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;
        let body = pos + 8;

        if chunk_id == b"data" {
            return wav_data.get(body..body + chunk_size);
        }

        // Chunks are word-aligned; odd sizes carry a pad byte.
        pos = body + chunk_size + (chunk_size % 2);
    }

    None
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
///
/// # Returns
/// Hex digest of the data chunk, or `None` if the format is invalid.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
