//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the host backend (winit) with the pointer accumulator.
//
// This module defines the contract between the host implementation and
// core state, so the capture state machine never depends on winit types.
//
// Components:
// - `interface`: Capture host contract and error definitions
// - `notification_queue`: Host → accumulator capture notifications
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod interface;
pub(crate) mod notification_queue;

//=== Public API ==========================================================

pub use interface::{CaptureHost, PlatformError};
pub use notification_queue::{notification_channel, CaptureNotifier, NotificationPump};
