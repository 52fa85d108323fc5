//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use pointer_bridge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Bridge entry point
pub use crate::bridge::{Bridge, BridgeBuilder};

// Rendering core contract
pub use crate::core::render::{Frame, RenderCore};

// Pointer types
pub use crate::core::pointer::{CaptureState, MovementDelta};

// Errors
pub use crate::core::platform_bridge::PlatformError;
pub use crate::core::surface::SurfaceError;
