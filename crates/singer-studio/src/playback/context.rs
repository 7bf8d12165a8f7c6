//! Processing-context lifecycle.

use crate::error::StudioResult;

use super::sink::AudioBackend;

/// Lifecycle state of the shared processing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextState {
    /// No context exists yet; it is created lazily on first use.
    #[default]
    Uninitialized,
    /// Ready to schedule playback.
    Active,
    /// Suspended from outside; must be resumed before use.
    Suspended,
}

/// The processing context as an explicitly owned value.
///
/// Suspension happens outside the controller's control (platform power
/// policy), so the context is re-validated with
/// [`PlaybackContext::ensure_active`] before every play request rather
/// than trusted across calls.
#[derive(Debug, Default)]
pub struct PlaybackContext {
    state: ContextState,
}

impl PlaybackContext {
    /// Creates an uninitialized context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// True when the context is ready without further work.
    pub fn is_active(&self) -> bool {
        self.state == ContextState::Active
    }

    /// Records a suspension imposed from outside.
    ///
    /// Only an active context can be suspended; the call is a no-op in the
    /// other states.
    pub fn mark_suspended(&mut self) {
        if self.state == ContextState::Active {
            self.state = ContextState::Suspended;
        }
    }

    /// Brings the context to `Active`, activating or resuming as needed.
    ///
    /// # Errors
    /// Propagates backend activation or resume failures; the context keeps
    /// its previous state in that case.
    pub(crate) fn ensure_active(&mut self, backend: &mut dyn AudioBackend) -> StudioResult<()> {
        match self.state {
            ContextState::Uninitialized => {
                backend.activate()?;
                log::debug!("playback context activated");
                self.state = ContextState::Active;
            }
            ContextState::Suspended => {
                backend.resume()?;
                log::debug!("playback context resumed");
                self.state = ContextState::Active;
            }
            ContextState::Active => {}
        }
        Ok(())
    }
}
