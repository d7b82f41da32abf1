//! Avatar image load state.
//!
//! The host reports load and error events; each one is a pure transition.
//! A failed image is replaced by the default profile image exactly once:
//! [`AvatarState::FailedFallback`] ignores any further load events, so a
//! broken fallback cannot start a retry loop.

/// Fallback avatar shown after the requested image fails to load.
pub const DEFAULT_PROFILE_IMAGE: &str = "/default-profile-image.png";

/// Load state of one avatar image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarState {
    /// Requested image is loading.
    Loading { src: String },
    /// Requested image is displayed.
    Loaded { src: String },
    /// Requested image failed; the fallback is displayed.
    FailedFallback { failed: String },
}

/// Events reported by the host for an avatar image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarEvent {
    Loaded,
    Failed,
    /// The bubble was re-rendered with a different image reference.
    SourceChanged(String),
}

impl AvatarState {
    pub fn new(src: impl Into<String>) -> Self {
        AvatarState::Loading { src: src.into() }
    }

    /// Image reference the bubble asked for, whatever is displayed.
    pub fn requested(&self) -> &str {
        match self {
            AvatarState::Loading { src } | AvatarState::Loaded { src } => src,
            AvatarState::FailedFallback { failed } => failed,
        }
    }

    /// Image reference to display.
    pub fn display_src<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            AvatarState::Loading { src } | AvatarState::Loaded { src } => src,
            AvatarState::FailedFallback { .. } => fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AvatarState::FailedFallback { .. })
    }

    /// Apply a host event.
    pub fn on_event(self, event: AvatarEvent) -> Self {
        match (self, event) {
            (state, AvatarEvent::SourceChanged(src)) => {
                if state.requested() == src {
                    state
                } else {
                    AvatarState::Loading { src }
                }
            }
            (state @ AvatarState::FailedFallback { .. }, _) => state,
            (AvatarState::Loading { src } | AvatarState::Loaded { src }, AvatarEvent::Loaded) => {
                AvatarState::Loaded { src }
            }
            (AvatarState::Loading { src } | AvatarState::Loaded { src }, AvatarEvent::Failed) => {
                tracing::error!(src = %src, "Profile image failed to load, using default image");
                AvatarState::FailedFallback { failed: src }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_success() {
        let state = AvatarState::new("a.png").on_event(AvatarEvent::Loaded);
        assert_eq!(state, AvatarState::Loaded { src: "a.png".into() });
        assert_eq!(state.display_src(DEFAULT_PROFILE_IMAGE), "a.png");
    }

    #[test]
    fn test_failure_substitutes_default() {
        let state = AvatarState::new("broken.png").on_event(AvatarEvent::Failed);
        assert!(state.is_fallback());
        assert_eq!(state.display_src(DEFAULT_PROFILE_IMAGE), DEFAULT_PROFILE_IMAGE);
        assert_eq!(state.requested(), "broken.png");
    }

    #[test]
    fn test_fallback_is_terminal() {
        let state = AvatarState::new("broken.png").on_event(AvatarEvent::Failed);
        // The fallback itself failing must not trigger another substitution.
        let again = state.clone().on_event(AvatarEvent::Failed);
        assert_eq!(again, state);
        let loaded = state.clone().on_event(AvatarEvent::Loaded);
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_same_source_keeps_state() {
        let state = AvatarState::new("broken.png").on_event(AvatarEvent::Failed);
        let same = state.clone().on_event(AvatarEvent::SourceChanged("broken.png".into()));
        assert_eq!(same, state);
    }

    #[test]
    fn test_new_source_restarts() {
        let state = AvatarState::new("broken.png")
            .on_event(AvatarEvent::Failed)
            .on_event(AvatarEvent::SourceChanged("b.png".into()));
        assert_eq!(state, AvatarState::Loading { src: "b.png".into() });
    }
}
