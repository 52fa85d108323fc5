//=========================================================================
// Capture State
//=========================================================================
//
// Pointer capture state machine types.
//
// Architecture:
//   Host channels (grab, focus, escape, ...) → CaptureChange → CaptureState
//
// The host may report capture changes through several channels. They are
// normalized at the platform boundary into one of two `CaptureChange`
// values, so the state machine only ever sees Granted / Released.
//
//=========================================================================

//=== CaptureState ========================================================

/// Whether the surface currently holds pointer capture.
///
/// Transitions are driven only by host notifications and never inferred
/// locally (a click *requests* capture, it does not grant it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureState {
    /// Pointer is free. Raw movement is discarded.
    #[default]
    Unlocked,

    /// Host confirmed capture. Raw movement is accumulated.
    Locked,
}

impl CaptureState {
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }
}

//=== CaptureChange =======================================================

/// Normalized host notification about pointer capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureChange {
    /// Host confirmed the surface now holds pointer capture.
    Granted,

    /// Host reports capture ended (any cause).
    Released,
}

//=== CaptureTransition ===================================================

/// A state change that actually happened after applying a [`CaptureChange`].
///
/// No-op notifications (Granted while Locked, Released while Unlocked)
/// produce no transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureTransition {
    /// `Unlocked → Locked`: start listening to raw movement.
    Entered,

    /// `Locked → Unlocked`: stop listening to raw movement.
    Exited,
}

//=== ReleaseCause ========================================================

/// Why the host released capture.
///
/// Only used for logging at the boundary. The state machine does not see
/// it; every cause collapses into [`CaptureChange::Released`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseCause {
    /// User pressed the host's escape gesture.
    EscapeGesture,

    /// Surface lost keyboard/window focus.
    FocusLost,

    /// Surface became hidden (minimized, fully covered).
    Occluded,

    /// Bridge or rendering core asked for release.
    Explicit,
}

impl From<ReleaseCause> for CaptureChange {
    fn from(_: ReleaseCause) -> Self {
        CaptureChange::Released
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_unlocked() {
        assert_eq!(CaptureState::default(), CaptureState::Unlocked);
        assert!(!CaptureState::default().is_locked());
    }

    #[test]
    fn every_release_cause_normalizes_to_released() {
        let causes = [
            ReleaseCause::EscapeGesture,
            ReleaseCause::FocusLost,
            ReleaseCause::Occluded,
            ReleaseCause::Explicit,
        ];

        for cause in causes {
            assert_eq!(CaptureChange::from(cause), CaptureChange::Released);
        }
    }
}
