//=========================================================================
// Platform Subsystem
//
// Plays the host role for the bridge on top of winit.
//
// Architecture:
// ```text
//  Winit Event Loop (single thread)
//  ┌───────────────────────────────────────────────────────────────┐
//  │  every handler: NotificationPump ──► PointerAccumulator       │
//  │                                                               │
//  │  WindowEvent ──► input_processor ──► HostInput                │
//  │                     ├─ CaptureRequested ─► WinitCaptureHost   │
//  │                     └─ CaptureLost      ─► WinitCaptureHost   │
//  │                                              │ notify()       │
//  │                                              ↓                │
//  │                                       notification queue      │
//  │                                                               │
//  │  DeviceEvent::MouseMotion ──► PointerAccumulator::on_movement │
//  │                                                               │
//  │  RedrawRequested ──► RenderCore::render_frame(Frame)          │
//  │                        └─ drain_movement() / pixels_mut()     │
//  │                  ──► Presenter (nearest-neighbor)             │
//  └───────────────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: one drain per rendered frame
// - **Pump before every handler**: host notifications are applied in the
//   order the host produced them relative to later input
// - **Device events as subscription**: raw motion is only listened to
//   while capture is held (`DeviceEvents::Always` / `Never`)
// - **Main thread requirement**: winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Bridge::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod capture_host;
mod input_processor;
mod presenter;

//=== Standard Library Imports ============================================

use std::rc::Rc;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, DeviceEvents, EventLoop},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{
    notification_channel, CaptureHost, CaptureNotifier, NotificationPump, PlatformError,
};
use crate::core::pointer::{CaptureTransition, PointerAccumulator, ReleaseCause};
use crate::core::render::{Frame, RenderCore};
use crate::core::surface::{HostViewport, Surface, SurfaceError, SurfaceManager};
use capture_host::WinitCaptureHost;
use input_processor::HostInput;
use presenter::{FrameTarget, Presenter};

//=== WindowConfig ========================================================

/// Window parameters resolved by the bridge builder.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub inner_size: (u32, u32),
    pub fullscreen: bool,
    pub decorations: bool,
}

impl WindowConfig {
    fn attributes(&self) -> WindowAttributes {
        let (width, height) = self.inner_size;
        let fullscreen = self.fullscreen.then_some(Fullscreen::Borderless(None));

        WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false)
            .with_decorations(self.decorations)
            .with_fullscreen(fullscreen)
    }
}

//=== HostViewport ========================================================

impl HostViewport for Window {
    fn viewport_size(&self) -> (u32, u32) {
        let size = self.inner_size();
        (size.width, size.height)
    }
}

//=== Motion Subscription =================================================

/// Raw-motion listening mode that follows a capture transition.
fn motion_subscription(transition: CaptureTransition) -> DeviceEvents {
    match transition {
        CaptureTransition::Entered => DeviceEvents::Always,
        CaptureTransition::Exited => DeviceEvents::Never,
    }
}

//=== ActiveSurface =======================================================

/// Everything that exists only once the window is up.
struct ActiveSurface<H, P> {
    surface: Surface,
    presenter: P,
    capture: H,
}

//=== Platform ============================================================

/// Window owner, capture host and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` - no window yet
/// 2. **Execution**: `platform.run()` - blocks in the winit event loop
/// 3. **Resume**: window, surface and presenter are created exactly once
/// 4. **Shutdown**: close request or fatal error exits the loop
///
/// # Thread Safety
///
/// Not Send/Sync. Every handler runs to completion on the event-loop
/// thread, so the accumulator is only ever reached through `&mut self`.
pub(crate) struct Platform<R, H = WinitCaptureHost, P = Presenter>
where
    R: RenderCore,
    H: CaptureHost,
    P: FrameTarget,
{
    /// Consumed on first resume; `None` afterwards.
    surface_manager: Option<SurfaceManager>,

    /// Window-bound state (None until `resumed()`).
    active: Option<ActiveSurface<H, P>>,

    window_config: WindowConfig,

    /// Capture state + movement sum.
    pointer: PointerAccumulator,

    /// Host → accumulator notifications.
    pump: NotificationPump,

    /// Handed to the capture host on window creation.
    notifier: CaptureNotifier,

    core: R,

    /// First fatal error seen inside the event loop.
    fatal: Option<PlatformError>,
}

impl<R: RenderCore> Platform<R> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(window_config: WindowConfig, surface_manager: SurfaceManager, core: R) -> Self {
        Self::detached(window_config, surface_manager, core)
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or a fatal error.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails, or if surface setup or presentation failed inside the loop.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        match self.fatal.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Winit Helpers ----------------------------------------------------

    /// Creates window, surface, presenter and capture host.
    fn create_surface(
        &self,
        event_loop: &ActiveEventLoop,
        manager: SurfaceManager,
    ) -> Result<ActiveSurface<WinitCaptureHost, Presenter>, PlatformError> {
        let window = event_loop
            .create_window(self.window_config.attributes())
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;
        let window = Rc::new(window);

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let surface = manager.initialize(&*window)?;
        let presenter = Presenter::new(window.clone())?;
        let capture = WinitCaptureHost::new(window, self.notifier.clone());

        Ok(ActiveSurface { surface, presenter, capture })
    }

    /// Applies pending host notifications and moves the raw-motion
    /// subscription along with any capture change.
    fn sync_capture(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(mode) = self.pump_notifications() {
            debug!(target: "platform::capture", "Raw motion subscription: {:?}", mode);
            event_loop.listen_device_events(mode);
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        if self.fatal.is_none() {
            self.fatal = Some(error);
        }
        event_loop.exit();
    }
}

impl<R, H, P> Platform<R, H, P>
where
    R: RenderCore,
    H: CaptureHost,
    P: FrameTarget,
{
    fn detached(window_config: WindowConfig, surface_manager: SurfaceManager, core: R) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        let (notifier, pump) = notification_channel();

        Self {
            surface_manager: Some(surface_manager),
            active: None,
            window_config,
            pointer: PointerAccumulator::new(),
            pump,
            notifier,
            core,
            fatal: None,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Applies pending host notifications. Returns the new raw-motion
    /// subscription if capture changed.
    fn pump_notifications(&mut self) -> Option<DeviceEvents> {
        self.pump.pump(&mut self.pointer).map(motion_subscription)
    }

    fn handle_host_input(&mut self, input: HostInput) {
        match input {
            HostInput::Motion { dx, dy } => self.pointer.on_movement(dx, dy),

            HostInput::CaptureRequested => match self.active.as_mut() {
                Some(active) => {
                    debug!(target: "platform::capture", "Surface clicked, requesting capture");
                    active.capture.request_capture();
                }
                None => trace!(target: "platform::capture", "Click before surface exists ignored"),
            },

            HostInput::CaptureLost(cause) => {
                if let Some(active) = self.active.as_mut() {
                    active.capture.release_capture(cause);
                }
            }
        }
    }

    /// Frame boundary: one rendering-core frame, then present.
    fn redraw(&mut self) -> Result<(), SurfaceError> {
        let Some(active) = self.active.as_mut() else {
            return Ok(());
        };

        let mut frame = Frame::new(&mut self.pointer, &mut active.surface);
        self.core.render_frame(&mut frame);
        let release = frame.release_requested();

        if release {
            debug!(target: "platform::capture", "Rendering core asked to release capture");
            active.capture.release_capture(ReleaseCause::Explicit);
        }

        active.presenter.present(&active.surface)?;
        active.presenter.request_redraw();
        Ok(())
    }
}

//=== Winit Integration ===================================================

impl<R: RenderCore> ApplicationHandler for Platform<R> {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// The surface is created on the first call only.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(manager) = self.surface_manager.take() else {
            debug!(target: "platform", "Surface already exists (mobile resume?)");
            return;
        };

        // Raw motion stays unsubscribed until the host grants capture.
        event_loop.listen_device_events(DeviceEvents::Never);

        match self.create_surface(event_loop, manager) {
            Ok(active) => {
                active.presenter.request_redraw();
                self.active = Some(active);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        self.sync_capture(event_loop);

        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e.into());
                }
            }

            _ => {
                if let Some(input) = input_processor::process_window_event(&event) {
                    trace!(target: "platform::input", "Host input: {:?}", input);
                    self.handle_host_input(input);
                }
            }
        }
    }

    /// Handles raw device events (relative mouse motion).
    fn device_event(&mut self, event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        self.sync_capture(event_loop);

        if let Some(input) = input_processor::process_device_event(&event) {
            self.handle_host_input(input);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.sync_capture(event_loop);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
