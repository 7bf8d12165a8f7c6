//! Studio state machine types.
//!
//! The state set mirrors the interactive studio: a settled state on either
//! end (`Idle`, `Playback`) and transient busy states in between. Flows in
//! [`crate::session`] own the transitions; these types only answer what is
//! legal where.

/// The studio's top-level activity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudioState {
    /// Nothing in flight; ready for input.
    #[default]
    Idle,
    /// Capturing a live clip.
    Recording,
    /// Waiting on clip analysis or song composition.
    Analyzing,
    /// Waiting on audio synthesis.
    Generating,
    /// A finished take is loaded and playable.
    Playback,
}

impl StudioState {
    /// True while a flow is in flight and new input must be refused.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            StudioState::Recording | StudioState::Analyzing | StudioState::Generating
        )
    }

    /// True in the settled states where switching modes is allowed.
    pub fn allows_mode_switch(&self) -> bool {
        matches!(self, StudioState::Idle | StudioState::Playback)
    }
}

impl std::fmt::Display for StudioState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StudioState::Idle => "idle",
            StudioState::Recording => "recording",
            StudioState::Analyzing => "analyzing",
            StudioState::Generating => "generating",
            StudioState::Playback => "playback",
        };
        write!(f, "{name}")
    }
}

/// Which studio tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudioMode {
    /// Vocal producer: user clip in, backing track out.
    #[default]
    Producer,
    /// Composer: text prompt in, full performance out.
    Composer,
}

impl std::fmt::Display for StudioMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StudioMode::Producer => "producer",
            StudioMode::Composer => "composer",
        };
        write!(f, "{name}")
    }
}
