//=========================================================================
// Input Processor
//=========================================================================
//
// Normalizes winit events into the few host inputs the bridge cares about.
//
// Architecture:
//   WindowEvent / DeviceEvent → HostInput → CaptureHost / PointerAccumulator
//
// Every capture-ending channel winit exposes (escape gesture, focus loss,
// occlusion) collapses into `HostInput::CaptureLost`. Everything else
// (keyboard text, cursor position, wheel, touch) is filtered (None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::pointer::ReleaseCause;

//=== HostInput ===========================================================

/// Host input relevant to pointer capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum HostInput {
    /// User clicked the surface: ask the host for capture.
    CaptureRequested,

    /// Host-side reason to end capture.
    CaptureLost(ReleaseCause),

    /// Raw relative pointer motion.
    Motion { dx: f64, dy: f64 },
}

//=== Event Processing ====================================================

/// Converts a window event (filters irrelevant ones).
pub(crate) fn process_window_event(event: &WindowEvent) -> Option<HostInput> {
    match event {
        WindowEvent::MouseInput { state, button, .. } => process_mouse_button(*button, *state),
        WindowEvent::KeyboardInput { event, .. } => process_key_event(event),
        WindowEvent::Focused(focused) => process_focus(*focused),
        WindowEvent::Occluded(occluded) => process_occlusion(*occluded),
        _ => None,
    }
}

/// Converts a device event. Only relative mouse motion is kept.
pub(crate) fn process_device_event(event: &DeviceEvent) -> Option<HostInput> {
    match event {
        DeviceEvent::MouseMotion { delta: (dx, dy) } => Some(HostInput::Motion { dx: *dx, dy: *dy }),
        _ => None,
    }
}

//--- Internal Helpers ----------------------------------------------------

fn process_mouse_button(button: MouseButton, state: ElementState) -> Option<HostInput> {
    match (button, state) {
        (MouseButton::Left, ElementState::Pressed) => Some(HostInput::CaptureRequested),
        _ => None,
    }
}

fn process_key_event(event: &KeyEvent) -> Option<HostInput> {
    process_key(event.physical_key, event.state, event.repeat)
}

fn process_key(key: PhysicalKey, state: ElementState, repeat: bool) -> Option<HostInput> {
    match (key, state, repeat) {
        (PhysicalKey::Code(KeyCode::Escape), ElementState::Pressed, false) => {
            Some(HostInput::CaptureLost(ReleaseCause::EscapeGesture))
        }
        _ => None,
    }
}

fn process_focus(focused: bool) -> Option<HostInput> {
    (!focused).then_some(HostInput::CaptureLost(ReleaseCause::FocusLost))
}

fn process_occlusion(occluded: bool) -> Option<HostInput> {
    occluded.then_some(HostInput::CaptureLost(ReleaseCause::Occluded))
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_press_requests_capture() {
        assert_eq!(
            process_mouse_button(MouseButton::Left, ElementState::Pressed),
            Some(HostInput::CaptureRequested)
        );
    }

    #[test]
    fn other_buttons_and_releases_are_filtered() {
        assert_eq!(process_mouse_button(MouseButton::Left, ElementState::Released), None);
        assert_eq!(process_mouse_button(MouseButton::Right, ElementState::Pressed), None);
        assert_eq!(process_mouse_button(MouseButton::Middle, ElementState::Pressed), None);
    }

    #[test]
    fn escape_press_ends_capture() {
        assert_eq!(
            process_key(PhysicalKey::Code(KeyCode::Escape), ElementState::Pressed, false),
            Some(HostInput::CaptureLost(ReleaseCause::EscapeGesture))
        );
    }

    #[test]
    fn escape_repeat_and_other_keys_are_filtered() {
        assert_eq!(
            process_key(PhysicalKey::Code(KeyCode::Escape), ElementState::Pressed, true),
            None
        );
        assert_eq!(
            process_key(PhysicalKey::Code(KeyCode::Escape), ElementState::Released, false),
            None
        );
        assert_eq!(
            process_key(PhysicalKey::Code(KeyCode::KeyW), ElementState::Pressed, false),
            None
        );
    }

    #[test]
    fn focus_loss_ends_capture() {
        assert_eq!(
            process_window_event(&WindowEvent::Focused(false)),
            Some(HostInput::CaptureLost(ReleaseCause::FocusLost))
        );
        assert_eq!(process_window_event(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn occlusion_ends_capture() {
        assert_eq!(
            process_window_event(&WindowEvent::Occluded(true)),
            Some(HostInput::CaptureLost(ReleaseCause::Occluded))
        );
        assert_eq!(process_window_event(&WindowEvent::Occluded(false)), None);
    }

    #[test]
    fn mouse_motion_passes_raw_delta() {
        let event = DeviceEvent::MouseMotion { delta: (-3.5, 12.0) };
        assert_eq!(
            process_device_event(&event),
            Some(HostInput::Motion { dx: -3.5, dy: 12.0 })
        );
    }

    #[test]
    fn other_device_events_are_filtered() {
        assert_eq!(process_device_event(&DeviceEvent::Added), None);
    }

    #[test]
    fn redraw_is_not_host_input() {
        assert_eq!(process_window_event(&WindowEvent::RedrawRequested), None);
    }
}
