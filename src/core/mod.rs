//=========================================================================
// Core Systems
//
// Host-independent state of the bridge.
//
// Responsibilities:
// - Own the capture state machine and movement accumulator (`pointer`)
// - Own the fixed-size pixel buffer and its presentation rules (`surface`)
// - Define the rendering core contract (`render`)
// - Define the host contract and notification queue (`platform_bridge`)
//
// Notes:
// Nothing in here touches winit. The platform layer translates host
// events into these types and drives them from the event loop.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod platform_bridge;
pub mod pointer;
pub mod render;
pub mod surface;

//=== Re-exports ==========================================================

pub use platform_bridge::{CaptureHost, PlatformError};
pub use pointer::{CaptureChange, CaptureState, MovementDelta, PointerAccumulator, ReleaseCause};
pub use render::{Frame, RenderCore};
pub use surface::{HostViewport, Surface, SurfaceError, SurfaceManager};
