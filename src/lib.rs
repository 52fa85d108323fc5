//=========================================================================
// Pointer Bridge — Library Root
//
// This crate connects a native window to an external rendering core.
//
// Responsibilities:
// - Expose the bridge entry point (`Bridge`, `BridgeBuilder`)
// - Expose the rendering core contract (`RenderCore`, `Frame`)
// - Keep the winit host layer (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use pointer_bridge::{BridgeBuilder, Frame, RenderCore};
//
// struct Core;
// impl RenderCore for Core {
//     fn render_frame(&mut self, frame: &mut Frame<'_>) {
//         let _movement = frame.drain_movement();
//     }
// }
//
// fn main() {
//     BridgeBuilder::new().build().run(Core).unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the host-independent pieces: capture state machine,
// movement accumulator, pixel surface and the host contract.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` is the winit host (window, cursor grab, device events,
// softbuffer presentation) and is not part of the public API surface.
//
// `bridge` defines the builder and the blocking run entry point.
//
mod bridge;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use bridge::{Bridge, BridgeBuilder};
pub use crate::core::{Frame, MovementDelta, PlatformError, RenderCore};
