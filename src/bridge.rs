//=========================================================================
// Pointer Bridge
//
// Main entry point: configure the host window, then hand the bridge a
// rendering core and run.
//
// Architecture:
// ```text
//     BridgeBuilder  ──build()──>  Bridge  ──run(core)──>  [Host Event Loop]
//         │                          │
//         ├─ with_display_scale()    └─ creates window + surface once
//         ├─ with_title()               drives core once per redraw
//         ├─ with_inner_size()          blocks until exit
//         ├─ with_fullscreen()
//         └─ with_decorations()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformError;
use crate::core::render::RenderCore;
use crate::core::surface::SurfaceManager;
use crate::platform::{Platform, WindowConfig};

//=== BridgeBuilder =======================================================

/// Builder for configuring and constructing a [`Bridge`].
///
/// # Default Values
///
/// - **Display scale**: 0.5 (buffer shown at half size, nearest-neighbor)
/// - **Title**: "Pointer Bridge"
/// - **Inner size**: 1280x720 logical pixels
/// - **Fullscreen**: off
/// - **Decorations**: on
///
/// # Examples
///
/// ```no_run
/// use pointer_bridge::{BridgeBuilder, Frame, RenderCore};
///
/// struct Core;
///
/// impl RenderCore for Core {
///     fn render_frame(&mut self, frame: &mut Frame<'_>) {
///         let movement = frame.drain_movement();
///         let shade = (movement.dx.abs().min(255.0)) as u32;
///         frame.pixels_mut().fill(shade << 16);
///     }
/// }
///
/// BridgeBuilder::new()
///     .with_display_scale(1.0)
///     .with_fullscreen(true)
///     .build()
///     .run(Core)
///     .expect("host environment unsupported");
/// ```
#[derive(Debug, Clone)]
pub struct BridgeBuilder {
    display_scale: f64,
    title: String,
    inner_size: (u32, u32),
    fullscreen: bool,
    decorations: bool,
}

impl BridgeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            display_scale: 0.5,
            title: "Pointer Bridge".to_string(),
            inner_size: (1280, 720),
            fullscreen: false,
            decorations: true,
        }
    }

    /// Sets how many window pixels one surface pixel occupies.
    ///
    /// Presentation only: the pixel buffer always matches the viewport.
    ///
    /// Default: 0.5
    ///
    /// # Panics
    ///
    /// Panics if `scale` is not positive and finite.
    pub fn with_display_scale(mut self, scale: f64) -> Self {
        assert!(
            scale.is_finite() && scale > 0.0,
            "Display scale must be positive and finite, got {}",
            scale
        );
        self.display_scale = scale;
        self
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the requested window inner size in logical pixels.
    ///
    /// The host may adjust it (DPI, fullscreen); the buffer follows what
    /// the host actually reports at creation.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_inner_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.inner_size = (width, height);
        self
    }

    /// Opens a borderless fullscreen window on the current monitor.
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Shows or hides window chrome (title bar, borders).
    pub fn with_decorations(mut self, decorations: bool) -> Self {
        self.decorations = decorations;
        self
    }

    /// Builds the bridge instance.
    pub fn build(self) -> Bridge {
        info!(
            "Building bridge (scale: {}, size: {}x{}, fullscreen: {})",
            self.display_scale, self.inner_size.0, self.inner_size.1, self.fullscreen
        );

        Bridge {
            surface_manager: SurfaceManager::new(self.display_scale),
            window_config: WindowConfig {
                title: self.title,
                inner_size: self.inner_size,
                fullscreen: self.fullscreen,
                decorations: self.decorations,
            },
        }
    }
}

impl Default for BridgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Bridge ==============================================================

/// Presentation-and-input bridge runtime.
///
/// Create via [`BridgeBuilder`]. [`Bridge::run`] consumes the bridge, so
/// the surface can only ever be set up once.
#[derive(Debug)]
pub struct Bridge {
    surface_manager: SurfaceManager,
    window_config: WindowConfig,
}

impl Bridge {
    /// Runs the host event loop with `core` and blocks until exit.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the host event loop
    /// 2. On resume: creates the window and a viewport-sized pixel buffer
    /// 3. Clicks request pointer capture; host notifications lock/unlock
    /// 4. Every redraw: `core.render_frame()` then nearest-neighbor present
    /// 5. On window close: returns `Ok(())`
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the host cannot provide an event loop,
    /// a window or a drawable surface, or if a frame cannot be presented.
    pub fn run<R: RenderCore>(self, core: R) -> Result<(), PlatformError> {
        info!("Starting bridge runtime");

        let platform = Platform::new(self.window_config, self.surface_manager, core);
        let result = platform.run();

        match &result {
            Ok(()) => info!("Bridge shutdown complete"),
            Err(e) => error!("Bridge stopped: {}", e),
        }

        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // BridgeBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = BridgeBuilder::new();
        assert_eq!(builder.display_scale, 0.5);
        assert_eq!(builder.inner_size, (1280, 720));
        assert!(!builder.fullscreen);
        assert!(builder.decorations);
    }

    #[test]
    fn builder_with_display_scale() {
        let builder = BridgeBuilder::new().with_display_scale(2.0);
        assert_eq!(builder.display_scale, 2.0);
    }

    #[test]
    #[should_panic(expected = "Display scale must be positive")]
    fn builder_with_display_scale_panics_on_zero() {
        BridgeBuilder::new().with_display_scale(0.0);
    }

    #[test]
    #[should_panic(expected = "Display scale must be positive")]
    fn builder_with_display_scale_panics_on_infinity() {
        BridgeBuilder::new().with_display_scale(f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "Window size must be non-zero")]
    fn builder_with_inner_size_panics_on_zero() {
        BridgeBuilder::new().with_inner_size(0, 720);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let bridge = BridgeBuilder::new()
            .with_display_scale(1.0)
            .with_title("Demo")
            .with_inner_size(1920, 1080)
            .with_fullscreen(true)
            .with_decorations(false)
            .build();

        assert_eq!(bridge.surface_manager.display_scale(), 1.0);
        assert_eq!(
            bridge.window_config,
            WindowConfig {
                title: "Demo".into(),
                inner_size: (1920, 1080),
                fullscreen: true,
                decorations: false,
            }
        );
    }
}
