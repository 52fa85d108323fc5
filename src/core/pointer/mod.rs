//=========================================================================
// Pointer System
//=========================================================================
//
// Pointer capture lifecycle and relative movement accumulation.
//
// Components:
// - `capture`: State machine types and normalized host notifications
// - `accumulator`: Owned `{dx, dy, state}` with on_movement() / drain()
//
//=========================================================================

//=== Module Declarations =================================================

mod accumulator;
mod capture;

//=== Public API ==========================================================

pub use accumulator::{MovementDelta, PointerAccumulator};
pub use capture::{CaptureChange, CaptureState, CaptureTransition, ReleaseCause};
