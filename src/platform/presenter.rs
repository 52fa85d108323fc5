//=========================================================================
// Presenter
//=========================================================================
//
// Puts the surface's pixel buffer on screen through softbuffer.
//
// The softbuffer target always matches the window's inner size. The
// surface is copied into it with nearest-neighbor sampling, anchored at
// the top-left corner, at the configured display scale.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::num::NonZeroU32;
use std::rc::Rc;

//=== External Dependencies ===============================================

use softbuffer::Context;
use winit::window::Window;

//=== Internal Dependencies ===============================================

use crate::core::surface::{Surface, SurfaceError};

//=== FrameTarget =========================================================

/// Where finished frames go, and how the next one is scheduled.
pub(crate) trait FrameTarget {
    fn present(&mut self, surface: &Surface) -> Result<(), SurfaceError>;

    fn request_redraw(&self);
}

//=== Presenter ===========================================================

pub(crate) struct Presenter {
    window: Rc<Window>,
    target: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    _context: Context<Rc<Window>>,
}

impl Presenter {
    pub(crate) fn new(window: Rc<Window>) -> Result<Self, SurfaceError> {
        let context = Context::new(window.clone()).map_err(|e| SurfaceError::Context(e.to_string()))?;
        let target = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| SurfaceError::Context(e.to_string()))?;

        Ok(Self { window, target, _context: context })
    }
}

impl FrameTarget for Presenter {
    /// Presents one frame. A zero-sized (minimized) window is skipped.
    fn present(&mut self, surface: &Surface) -> Result<(), SurfaceError> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        let failed = |e: softbuffer::SoftBufferError| SurfaceError::Present(e.to_string());

        self.target.resize(width, height).map_err(failed)?;

        let mut buffer = self.target.buffer_mut().map_err(failed)?;
        surface.present_nearest(&mut buffer, size.width, size.height);
        buffer.present().map_err(failed)
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
