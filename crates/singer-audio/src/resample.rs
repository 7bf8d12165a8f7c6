//! Linear sample-rate conversion for the offline render path.
//!
//! The mixer renders at an engine rate that usually differs from the source
//! rates (synthesized tracks arrive at 24 kHz). Linear interpolation keeps
//! the conversion deterministic and dependency-free; render output is hashed
//! for regression checks, so the interpolation must be bit-stable.

/// Number of frames a source occupies after conversion to `to_rate`.
///
/// Duration is preserved: `round(frames * to_rate / from_rate)`.
pub fn resampled_len(frames: usize, from_rate: u32, to_rate: u32) -> usize {
    if from_rate == to_rate {
        return frames;
    }
    (frames as f64 * to_rate as f64 / from_rate as f64).round() as usize
}

/// Converts one channel of samples from `from_rate` to `to_rate` by linear
/// interpolation. Equal rates return a straight copy.
pub fn resample_linear(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let out_len = resampled_len(samples.len(), from_rate, to_rate);
    let step = from_rate as f64 / to_rate as f64;
    let last = samples.len() - 1;

    let mut out = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let pos = i as f64 * step;
        let idx = (pos as usize).min(last);
        let next = (idx + 1).min(last);
        let frac = (pos - idx as f64) as f32;
        out.push(samples[idx] + (samples[next] - samples[idx]) * frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_equal_rates_copy() {
        let samples = vec![0.1, 0.2, 0.3];
        assert_eq!(resample_linear(&samples, 24000, 24000), samples);
    }

    #[test]
    fn test_resampled_len_doubling() {
        assert_eq!(resampled_len(100, 24000, 48000), 200);
        assert_eq!(resampled_len(5000, 24000, 48000), 10000);
    }

    #[test]
    fn test_resampled_len_halving() {
        assert_eq!(resampled_len(200, 48000, 24000), 100);
    }

    #[test]
    fn test_upsample_interpolates_midpoints() {
        // Doubling the rate places every other output sample halfway
        // between neighbors.
        let samples = vec![0.0, 1.0, 0.0];
        let out = resample_linear(&samples, 1000, 2000);

        assert_eq!(out.len(), 6);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 0.5);
        assert_eq!(out[2], 1.0);
        assert_eq!(out[3], 0.5);
        assert_eq!(out[4], 0.0);
        // Past the last source sample the tail holds its value.
        assert_eq!(out[5], 0.0);
    }

    #[test]
    fn test_downsample_picks_every_other() {
        let samples = vec![0.0, 0.25, 0.5, 0.75];
        let out = resample_linear(&samples, 2000, 1000);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 0.5);
    }

    #[test]
    fn test_constant_signal_survives_conversion() {
        let samples = vec![0.8; 240];
        let out = resample_linear(&samples, 24000, 48000);
        assert_eq!(out.len(), 480);
        assert!(out.iter().all(|&s| (s - 0.8).abs() < 1e-6));
    }

    #[test]
    fn test_empty_input() {
        assert!(resample_linear(&[], 24000, 48000).is_empty());
        assert_eq!(resampled_len(0, 24000, 48000), 0);
    }

    #[test]
    fn test_resample_determinism() {
        let samples: Vec<f32> = (0..500).map(|i| ((i as f32) * 0.013).sin()).collect();
        let a = resample_linear(&samples, 24000, 48000);
        let b = resample_linear(&samples, 24000, 48000);
        assert_eq!(a, b);
    }
}
