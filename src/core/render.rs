//=========================================================================
// Rendering Core Interface
//=========================================================================
//
// The contract between the bridge and the external rendering core.
//
// The bridge calls `RenderCore::render_frame` once per host redraw. The
// core pulls movement through `Frame::drain_movement` and owns the pixel
// contents; the bridge only allocates and presents the buffer.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::pointer::{MovementDelta, PointerAccumulator};
use crate::core::surface::Surface;

//=== RenderCore ==========================================================

/// External consumer that reads drained movement and draws pixels.
pub trait RenderCore {
    /// Produces one frame. Called once per host redraw.
    fn render_frame(&mut self, frame: &mut Frame<'_>);
}

//=== Frame ===============================================================

/// Per-frame view handed to the rendering core.
///
/// Borrowing the accumulator through `Frame` keeps `drain` as the only
/// pointer operation the core can reach. Capture can only be given up,
/// never taken: a grab needs a user click on the surface.
pub struct Frame<'a> {
    pointer: &'a mut PointerAccumulator,
    surface: &'a mut Surface,
    release_requested: bool,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(pointer: &'a mut PointerAccumulator, surface: &'a mut Surface) -> Self {
        Self { pointer, surface, release_requested: false }
    }

    /// Net pointer motion since the previous drain, then reset to zero.
    pub fn drain_movement(&mut self) -> MovementDelta {
        self.pointer.drain()
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Row-major `0RGB` pixels, `width * height` entries.
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        self.surface.pixels_mut()
    }

    /// Asks the host to end pointer capture after this frame.
    ///
    /// The state only changes once the host confirms the release, so
    /// movement drained later in the same frame is still counted.
    pub fn release_capture(&mut self) {
        self.release_requested = true;
    }

    pub(crate) fn release_requested(&self) -> bool {
        self.release_requested
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pointer::CaptureChange;
    use crate::core::surface::{HostViewport, SurfaceManager};

    struct FixedViewport;

    impl HostViewport for FixedViewport {
        fn viewport_size(&self) -> (u32, u32) {
            (8, 4)
        }
    }

    #[test]
    fn frame_drains_through_accumulator() {
        let mut pointer = PointerAccumulator::new();
        let mut surface = SurfaceManager::new(1.0).initialize(&FixedViewport).unwrap();

        pointer.apply(CaptureChange::Granted);
        pointer.on_movement(3.0, 4.0);

        let mut frame = Frame::new(&mut pointer, &mut surface);
        assert_eq!(frame.drain_movement(), MovementDelta::new(3.0, 4.0));
        assert_eq!(frame.drain_movement(), MovementDelta::ZERO);
    }

    #[test]
    fn release_request_does_not_touch_state() {
        let mut pointer = PointerAccumulator::new();
        let mut surface = SurfaceManager::new(1.0).initialize(&FixedViewport).unwrap();
        pointer.apply(CaptureChange::Granted);

        let mut frame = Frame::new(&mut pointer, &mut surface);
        assert!(!frame.release_requested());
        frame.release_capture();
        assert!(frame.release_requested());

        assert!(pointer.state().is_locked());
    }

    struct FillCore;

    impl RenderCore for FillCore {
        fn render_frame(&mut self, frame: &mut Frame<'_>) {
            assert_eq!((frame.width(), frame.height()), (8, 4));
            frame.pixels_mut().fill(0x00FF_00FF);
        }
    }

    #[test]
    fn core_writes_pixels_through_frame() {
        let mut pointer = PointerAccumulator::new();
        let mut surface = SurfaceManager::new(1.0).initialize(&FixedViewport).unwrap();

        FillCore.render_frame(&mut Frame::new(&mut pointer, &mut surface));

        assert!(surface.pixels().iter().all(|&p| p == 0x00FF_00FF));
    }
}
