//=========================================================================
// Capture Notification Queue
//=========================================================================
//
// Carries host capture notifications to the pointer accumulator.
//
// Architecture:
//   CaptureHost ──notify()──► channel ──pump()──► PointerAccumulator
//
// The host confirms capture asynchronously: a grant is only applied on
// the next pump, never inside the request call. The platform pumps at
// the start of every event handler, so notifications and input keep the
// order the host produced them in.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::pointer::{CaptureChange, CaptureTransition, PointerAccumulator};

//=== Construction ========================================================

/// Creates a connected notifier / pump pair.
pub fn notification_channel() -> (CaptureNotifier, NotificationPump) {
    let (sender, receiver) = unbounded();
    (CaptureNotifier { sender }, NotificationPump { receiver })
}

//=== CaptureNotifier =====================================================

/// Host-side handle used to report capture changes.
#[derive(Debug, Clone)]
pub struct CaptureNotifier {
    sender: Sender<CaptureChange>,
}

impl CaptureNotifier {
    pub fn notify(&self, change: CaptureChange) {
        if self.sender.send(change).is_err() {
            warn!(
                target: "platform::capture",
                "Notification queue disconnected, dropping {:?}",
                change
            );
        }
    }
}

//=== NotificationPump ====================================================

/// Bridge-side end that applies queued notifications.
#[derive(Debug)]
pub struct NotificationPump {
    receiver: Receiver<CaptureChange>,
}

impl NotificationPump {
    /// Applies every pending notification to `pointer` in arrival order.
    ///
    /// Returns the last transition that actually happened, which decides
    /// whether raw movement should be subscribed to afterwards.
    pub fn pump(&mut self, pointer: &mut PointerAccumulator) -> Option<CaptureTransition> {
        const MAX_NOTIFICATIONS_PER_PUMP: usize = 64;

        let mut last = None;
        let mut applied = 0;

        while applied < MAX_NOTIFICATIONS_PER_PUMP {
            match self.receiver.try_recv() {
                Ok(change) => {
                    if let Some(transition) = pointer.apply(change) {
                        last = Some(transition);
                    }
                    applied += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if applied >= MAX_NOTIFICATIONS_PER_PUMP {
            warn!(
                target: "platform::capture",
                "Notification backlog: applied {} this pump",
                applied
            );
        } else if applied > 0 {
            trace!(target: "platform::capture", "Applied {} notifications", applied);
        }

        last
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform_bridge::CaptureHost;
    use crate::core::pointer::{CaptureState, MovementDelta, ReleaseCause};

    //--- Test Host --------------------------------------------------------

    /// Grants or denies every request, reporting through the queue.
    struct FakeHost {
        notifier: CaptureNotifier,
        grants: bool,
        holding: bool,
        requests: usize,
    }

    impl FakeHost {
        fn new(notifier: CaptureNotifier, grants: bool) -> Self {
            Self { notifier, grants, holding: false, requests: 0 }
        }
    }

    impl CaptureHost for FakeHost {
        fn request_capture(&mut self) {
            self.requests += 1;
            if self.grants && !self.holding {
                self.holding = true;
                self.notifier.notify(CaptureChange::Granted);
            }
        }

        fn release_capture(&mut self, cause: ReleaseCause) {
            if self.holding {
                self.holding = false;
                self.notifier.notify(cause.into());
            }
        }
    }

    fn setup(grants: bool) -> (FakeHost, NotificationPump, PointerAccumulator) {
        let (notifier, pump) = notification_channel();
        (FakeHost::new(notifier, grants), pump, PointerAccumulator::new())
    }

    //=====================================================================
    // Pump Tests
    //=====================================================================

    #[test]
    fn pump_on_empty_queue_is_noop() {
        let (_host, mut pump, mut pointer) = setup(true);

        assert_eq!(pump.pump(&mut pointer), None);
        assert_eq!(pointer.state(), CaptureState::Unlocked);
    }

    #[test]
    fn pump_applies_in_order_and_reports_last_transition() {
        let (notifier, mut pump) = notification_channel();
        let mut pointer = PointerAccumulator::new();

        notifier.notify(CaptureChange::Granted);
        notifier.notify(CaptureChange::Released);

        assert_eq!(pump.pump(&mut pointer), Some(CaptureTransition::Exited));
        assert_eq!(pointer.state(), CaptureState::Unlocked);
        assert!(pump.is_empty());
    }

    #[test]
    fn pump_ignores_noop_notifications() {
        let (notifier, mut pump) = notification_channel();
        let mut pointer = PointerAccumulator::new();

        notifier.notify(CaptureChange::Granted);
        notifier.notify(CaptureChange::Granted);

        assert_eq!(pump.pump(&mut pointer), Some(CaptureTransition::Entered));

        notifier.notify(CaptureChange::Granted);
        assert_eq!(pump.pump(&mut pointer), None);
    }

    #[test]
    fn notify_after_pump_dropped_does_not_panic() {
        let (notifier, pump) = notification_channel();
        drop(pump);

        notifier.notify(CaptureChange::Granted);
    }

    //=====================================================================
    // Capture Lifecycle Tests
    //=====================================================================

    #[test]
    fn request_does_not_transition_before_pump() {
        let (mut host, mut pump, mut pointer) = setup(true);

        host.request_capture();
        pointer.on_movement(4.0, 4.0);
        assert_eq!(pointer.state(), CaptureState::Unlocked);

        pump.pump(&mut pointer);
        assert_eq!(pointer.state(), CaptureState::Locked);
        assert_eq!(pointer.drain(), MovementDelta::ZERO, "Pre-grant movement counted");
    }

    #[test]
    fn denied_request_stays_unlocked() {
        let (mut host, mut pump, mut pointer) = setup(false);

        host.request_capture();
        host.request_capture();

        assert_eq!(host.requests, 2);
        assert_eq!(pump.pump(&mut pointer), None);
        assert_eq!(pointer.state(), CaptureState::Unlocked);
    }

    #[test]
    fn click_grant_feed_drain() {
        let (mut host, mut pump, mut pointer) = setup(true);
        assert_eq!(pointer.drain(), MovementDelta::ZERO);

        host.request_capture();
        pump.pump(&mut pointer);
        assert_eq!(pointer.state(), CaptureState::Locked);

        pointer.on_movement(3.0, -2.0);
        pointer.on_movement(1.0, 1.0);

        assert_eq!(pointer.drain(), MovementDelta::new(4.0, -1.0));
        assert_eq!(pointer.drain(), MovementDelta::ZERO);
    }

    #[test]
    fn release_mid_frame_keeps_prior_movement_only() {
        let (mut host, mut pump, mut pointer) = setup(true);
        host.request_capture();
        pump.pump(&mut pointer);

        pointer.on_movement(5.0, 5.0);
        host.release_capture(ReleaseCause::EscapeGesture);
        assert_eq!(pump.pump(&mut pointer), Some(CaptureTransition::Exited));

        assert_eq!(pointer.drain(), MovementDelta::new(5.0, 5.0));

        pointer.on_movement(9.0, 9.0);
        assert_eq!(pointer.drain(), MovementDelta::ZERO);
    }

    #[test]
    fn every_release_channel_ends_capture() {
        let causes = [
            ReleaseCause::EscapeGesture,
            ReleaseCause::FocusLost,
            ReleaseCause::Occluded,
            ReleaseCause::Explicit,
        ];

        for cause in causes {
            let (mut host, mut pump, mut pointer) = setup(true);
            host.request_capture();
            pump.pump(&mut pointer);

            host.release_capture(cause);
            pump.pump(&mut pointer);

            assert_eq!(pointer.state(), CaptureState::Unlocked, "{:?} kept capture", cause);
        }
    }
}
