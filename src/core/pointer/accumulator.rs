//=========================================================================
// Pointer Accumulator
//=========================================================================
//
// Capture state machine plus the movement accumulation buffer.
//
// Architecture:
//   CaptureChange ──apply()──────┐
//                                ↓
//   raw motion ──on_movement()──► { dx, dy, state } ──drain()──► RenderCore
//
// Frame lifecycle: many on_movement() → one drain() per rendered frame.
//
// All entry points take `&mut self` and run on the host event loop, so
// a drain observes every movement applied before it and none after it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, trace};

//=== Internal Dependencies ===============================================

use super::capture::{CaptureChange, CaptureState, CaptureTransition};

//=== MovementDelta =======================================================

/// Net relative pointer motion, in host input units.
///
/// No clamping or unit conversion is applied; interpreting the values is
/// the rendering core's job.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementDelta {
    pub dx: f64,
    pub dy: f64,
}

impl MovementDelta {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl From<(f64, f64)> for MovementDelta {
    fn from((dx, dy): (f64, f64)) -> Self {
        Self { dx, dy }
    }
}

impl From<MovementDelta> for (f64, f64) {
    fn from(delta: MovementDelta) -> Self {
        (delta.dx, delta.dy)
    }
}

//=== PointerAccumulator ==================================================

/// Owns the capture state and the running movement sum.
///
/// Movement is only counted while [`CaptureState::Locked`]. Each event is
/// counted in exactly one [`drain`](Self::drain) result.
#[derive(Debug, Default)]
pub struct PointerAccumulator {
    dx: f64,
    dy: f64,
    state: CaptureState,
}

impl PointerAccumulator {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self::default()
    }

    //--- Capture State Machine --------------------------------------------

    /// Applies a host capture notification.
    ///
    /// Returns the transition that happened, or `None` when the
    /// notification matches the current state.
    pub fn apply(&mut self, change: CaptureChange) -> Option<CaptureTransition> {
        match (self.state, change) {
            (CaptureState::Unlocked, CaptureChange::Granted) => {
                self.state = CaptureState::Locked;
                info!(target: "platform::capture", "Pointer capture is now locked");
                Some(CaptureTransition::Entered)
            }
            (CaptureState::Locked, CaptureChange::Released) => {
                self.state = CaptureState::Unlocked;
                info!(target: "platform::capture", "Pointer capture is now unlocked");
                Some(CaptureTransition::Exited)
            }
            (state, change) => {
                trace!(
                    target: "platform::capture",
                    "Ignoring {:?} while {:?}",
                    change,
                    state
                );
                None
            }
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    //--- Event Ingestion --------------------------------------------------

    /// Adds one raw movement event to the running sum.
    ///
    /// Discarded while unlocked, including events that were already in
    /// flight when capture was released.
    pub fn on_movement(&mut self, dx: f64, dy: f64) {
        if !self.state.is_locked() {
            trace!(target: "platform::input", "Discarding stray movement ({}, {})", dx, dy);
            return;
        }

        self.dx += dx;
        self.dy += dy;
    }

    //--- Drain ------------------------------------------------------------

    /// Returns the motion accumulated since the last drain and resets it.
    ///
    /// Callable in any state; never blocks.
    pub fn drain(&mut self) -> MovementDelta {
        MovementDelta {
            dx: std::mem::take(&mut self.dx),
            dy: std::mem::take(&mut self.dy),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
