//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (capture host contract and errors).
//
// Defines what a host backend must provide so the pointer accumulator
// can stay independent of winit.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::pointer::ReleaseCause;
use crate::core::surface::SurfaceError;

//=== CaptureHost =========================================================

/// Host pointer-capture API.
///
/// Both calls are fire-and-forget. The host reports the outcome later
/// through a [`CaptureNotifier`](super::CaptureNotifier); a denied request
/// reports nothing.
pub trait CaptureHost {
    /// Asks the host to capture the pointer (on a user click).
    fn request_capture(&mut self);

    /// Asks the host to end capture.
    fn release_capture(&mut self, cause: ReleaseCause);
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// All variants are fatal: the bridge has no fallback rendering path.
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop execution error.
    EventLoopExecution(String),

    /// Host refused to create a window.
    WindowCreation(String),

    /// Surface setup or presentation failed.
    Surface(SurfaceError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::Surface(e) => write!(f, "Surface error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SurfaceError> for PlatformError {
    fn from(e: SurfaceError) -> Self {
        Self::Surface(e)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn surface_error_is_wrapped_as_source() {
        let err = PlatformError::from(SurfaceError::NoDrawableArea { width: 0, height: 0 });

        assert!(err.to_string().starts_with("Surface error"));
        assert!(err.source().is_some());
    }

    #[test]
    fn present_failure_is_wrapped_as_source() {
        let err = PlatformError::from(SurfaceError::Present("buffer lost".into()));

        assert_eq!(err.to_string(), "Surface error: Frame presentation failed: buffer lost");
        assert!(err.source().is_some());
    }

    #[test]
    fn string_variants_have_no_source() {
        let err = PlatformError::WindowCreation("no display".into());

        assert_eq!(err.to_string(), "Window creation failed: no display");
        assert!(err.source().is_none());
    }
}
