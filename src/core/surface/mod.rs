//=========================================================================
// Surface Manager
//=========================================================================
//
// One-time setup of the pixel buffer the rendering core draws into, and
// nearest-neighbor presentation of that buffer at a display scale.
//
// Architecture:
//   HostViewport ──initialize()──► Surface { width, height, pixels }
//                                      │
//                                      └─present_nearest()──► host framebuffer
//
// The buffer resolution is fixed at creation. Viewport changes after
// startup are not tracked.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== HostViewport ========================================================

/// Anything that can report the drawable area of the host display.
pub trait HostViewport {
    /// Current viewport size in physical pixels `(width, height)`.
    fn viewport_size(&self) -> (u32, u32);
}

//=== SurfaceError ========================================================

/// Surface setup errors. All of them are fatal: there is no fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// Host exposes no drawable area (zero-sized viewport).
    NoDrawableArea { width: u32, height: u32 },

    /// Presentation context for the window could not be created.
    Context(String),

    /// A frame could not be handed to the host framebuffer.
    Present(String),
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDrawableArea { width, height } => {
                write!(f, "Host viewport has no drawable area ({}x{})", width, height)
            }
            Self::Context(e) => write!(f, "Presentation context unavailable: {}", e),
            Self::Present(e) => write!(f, "Frame presentation failed: {}", e),
        }
    }
}

impl std::error::Error for SurfaceError {}

//=== SurfaceManager ======================================================

/// Creates the one [`Surface`] of the process.
///
/// [`initialize`](Self::initialize) consumes the manager, so a given
/// manager can never produce a second surface.
#[derive(Debug)]
pub struct SurfaceManager {
    display_scale: f64,
}

impl SurfaceManager {
    /// # Panics
    ///
    /// Panics if `display_scale` is not a positive, finite number.
    pub fn new(display_scale: f64) -> Self {
        assert!(
            display_scale.is_finite() && display_scale > 0.0,
            "Display scale must be positive and finite, got {}",
            display_scale
        );
        Self { display_scale }
    }

    pub fn display_scale(&self) -> f64 {
        self.display_scale
    }

    /// Allocates a pixel buffer matching the host viewport exactly.
    ///
    /// The display scale only affects presentation, never the buffer size.
    pub fn initialize<V: HostViewport + ?Sized>(self, viewport: &V) -> Result<Surface, SurfaceError> {
        let (width, height) = viewport.viewport_size();

        if width == 0 || height == 0 {
            return Err(SurfaceError::NoDrawableArea { width, height });
        }

        info!(
            target: "platform",
            "Surface initialized: {}x{} buffer, presented at {}x",
            width,
            height,
            self.display_scale
        );

        Ok(Surface {
            width,
            height,
            display_scale: self.display_scale,
            pixels: vec![0; width as usize * height as usize],
        })
    }
}

//=== Surface =============================================================

/// Fixed-size `0RGB` pixel buffer owned by the bridge, written by the
/// rendering core.
#[derive(Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    display_scale: f64,
    pixels: Vec<u32>,
}

impl Surface {
    //--- Accessors --------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn display_scale(&self) -> f64 {
        self.display_scale
    }

    /// Row-major pixels, `width * height` entries.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    //--- Presentation -----------------------------------------------------

    /// Copies the buffer into `dst` (`dst_width * dst_height` pixels) with
    /// nearest-neighbor sampling at the display scale.
    ///
    /// The image is anchored at the destination origin. Destination pixels
    /// that fall outside the scaled image are cleared to black.
    pub fn present_nearest(&self, dst: &mut [u32], dst_width: u32, dst_height: u32) {
        let dst_width = dst_width as usize;
        let dst_height = dst_height as usize;
        if dst_width == 0 || dst_height == 0 {
            return;
        }
        debug_assert!(dst.len() >= dst_width * dst_height);

        // Source column for each destination column (None = outside image).
        let columns: Vec<Option<usize>> = (0..dst_width)
            .map(|x| self.source_index(x, self.width))
            .collect();

        for (y, row) in dst.chunks_exact_mut(dst_width).take(dst_height).enumerate() {
            let Some(src_y) = self.source_index(y, self.height) else {
                row.fill(0);
                continue;
            };

            let src_row = &self.pixels[src_y * self.width as usize..][..self.width as usize];
            for (out, column) in row.iter_mut().zip(&columns) {
                *out = column.map_or(0, |src_x| src_row[src_x]);
            }
        }
    }

    fn source_index(&self, dst: usize, extent: u32) -> Option<usize> {
        let src = (dst as f64 / self.display_scale).floor() as usize;
        (src < extent as usize).then_some(src)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
