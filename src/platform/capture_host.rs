//=========================================================================
// Winit Capture Host
//=========================================================================
//
// Implements the host pointer-capture API on top of winit cursor grabs.
//
// Grab modes:
//   Locked   → preferred (macOS, Wayland, Web)
//   Confined → fallback (Windows, X11); raw motion still arrives as
//              DeviceEvent::MouseMotion, the cursor is just hidden
//
// Outcomes are reported through the notification queue, never applied
// directly, so the accumulator only transitions on the next pump.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::rc::Rc;

//=== External Dependencies ===============================================

use log::{debug, info, warn};
use winit::window::{CursorGrabMode, Window};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{CaptureHost, CaptureNotifier};
use crate::core::pointer::{CaptureChange, ReleaseCause};

//=== WinitCaptureHost ====================================================

pub(crate) struct WinitCaptureHost {
    window: Rc<Window>,
    notifier: CaptureNotifier,
    holding: bool,
}

impl WinitCaptureHost {
    pub(crate) fn new(window: Rc<Window>, notifier: CaptureNotifier) -> Self {
        Self { window, notifier, holding: false }
    }

    fn grab(&self) -> Result<CursorGrabMode, winit::error::ExternalError> {
        match self.window.set_cursor_grab(CursorGrabMode::Locked) {
            Ok(()) => Ok(CursorGrabMode::Locked),
            Err(e) => {
                debug!(target: "platform::capture", "Locked grab unavailable ({}), trying confined", e);
                self.window
                    .set_cursor_grab(CursorGrabMode::Confined)
                    .map(|()| CursorGrabMode::Confined)
            }
        }
    }
}

impl CaptureHost for WinitCaptureHost {
    fn request_capture(&mut self) {
        if self.holding {
            debug!(target: "platform::capture", "Capture already held, request ignored");
            return;
        }

        // On desktop backends `Ok` means the grab is already in place. The
        // web backend only starts `requestPointerLock` here and can still
        // refuse it later, so `Granted` is queued before the host actually
        // confirms; winit reports no lock-change event to wait on instead.
        match self.grab() {
            Ok(mode) => {
                self.window.set_cursor_visible(false);
                self.holding = true;
                info!(target: "platform::capture", "Host granted pointer capture ({:?})", mode);
                self.notifier.notify(CaptureChange::Granted);
            }
            Err(e) => {
                // Denial is not a state change; the bridge stays unlocked.
                warn!(target: "platform::capture", "Host denied pointer capture: {}", e);
            }
        }
    }

    fn release_capture(&mut self, cause: ReleaseCause) {
        if !self.holding {
            return;
        }

        if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            warn!(target: "platform::capture", "Failed to release cursor grab: {}", e);
        }
        self.window.set_cursor_visible(true);
        self.holding = false;

        info!(target: "platform::capture", "Host released pointer capture ({:?})", cause);
        self.notifier.notify(cause.into());
    }
}
