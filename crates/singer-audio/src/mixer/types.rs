//! Core types for the offline mix.

use crate::buffer::RawAudioBuffer;

/// Gain applied to the secondary source when the caller does not override it.
///
/// The primary source always renders unattenuated; the backing track sits
/// slightly under it.
pub const DEFAULT_SECONDARY_GAIN: f32 = 0.8;

/// A render request: up to two sources with a fixed gain relationship.
///
/// The primary slot carries the performance (lead vocal or uploaded track),
/// the secondary slot the synthesized backing. Either may be absent; the
/// mixer renders whatever is present.
#[derive(Debug, Clone, Copy)]
pub struct MixRequest<'a> {
    /// Lead source, rendered at full gain.
    pub primary: Option<&'a RawAudioBuffer>,
    /// Backing source, rendered at `secondary_gain`.
    pub secondary: Option<&'a RawAudioBuffer>,
    /// Gain multiplier for the secondary source.
    pub secondary_gain: f32,
}

impl<'a> MixRequest<'a> {
    /// Creates an empty request with the default secondary gain.
    pub fn new() -> Self {
        Self {
            primary: None,
            secondary: None,
            secondary_gain: DEFAULT_SECONDARY_GAIN,
        }
    }

    /// Sets the primary source.
    pub fn with_primary(mut self, buffer: &'a RawAudioBuffer) -> Self {
        self.primary = Some(buffer);
        self
    }

    /// Sets the secondary source.
    pub fn with_secondary(mut self, buffer: &'a RawAudioBuffer) -> Self {
        self.secondary = Some(buffer);
        self
    }

    /// Overrides the secondary gain.
    pub fn with_secondary_gain(mut self, gain: f32) -> Self {
        self.secondary_gain = gain;
        self
    }

    /// Returns true when neither slot holds a source.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }

    /// Present sources paired with their gains, primary first.
    pub fn sources(&self) -> Vec<(&'a RawAudioBuffer, f32)> {
        let mut sources = Vec::with_capacity(2);
        if let Some(primary) = self.primary {
            sources.push((primary, 1.0));
        }
        if let Some(secondary) = self.secondary {
            sources.push((secondary, self.secondary_gain));
        }
        sources
    }
}

impl Default for MixRequest<'_> {
    fn default() -> Self {
        Self::new()
    }
}
