//! Manual landing confirmation gate.
//!
//! Parking a vessel that is not in contact with the ground is a deliberate act, so the
//! "park now" command is guarded by a two-step confirmation: the first press arms a
//! fixed window, a second press inside that window confirms. The window is evaluated
//! lazily against the wall clock on every read, there is no scheduled timer and no
//! expiry event. An expired window simply reads as idle, and the next request arms a
//! fresh one.

/// Seconds an armed request stays valid, waiting for its confirmation.
pub const CONFIRM_WINDOW: f64 = 5.0;

/// Outcome of a manual parking request on a vessel without ground contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Second request inside the window, the caller should park the vessel now.
    Confirmed,
    /// A fresh window was armed, the vessel is not parked yet.
    Armed,
}

/// Gate state. An expired `Awaiting` is indistinguishable from `Idle` on read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum State {
    /// No request pending.
    #[default]
    Idle,
    /// A request is pending since the given wall-clock time.
    Awaiting {
        /// Wall-clock time of the request, in seconds.
        since: f64,
    },
}

/// Timed two-step confirmation gate for the manual parking command.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConfirmGate {
    state: State,
}

impl ConfirmGate {
    /// Creates a new gate, idle.
    #[must_use]
    pub fn new() -> ConfirmGate {
        ConfirmGate::default()
    }

    /// Registers a parking request at wall-clock time `now`.
    ///
    /// A request while a previous one is pending and unexpired confirms it. Any other
    /// request arms a fresh window starting at `now`, re-arming, not extending, any
    /// expired one.
    pub fn request(&mut self, now: f64) -> Request {
        if let State::Awaiting { since } = self.state {
            if now <= since + CONFIRM_WINDOW {
                return Request::Confirmed;
            }
        }

        self.state = State::Awaiting { since: now };
        Request::Armed
    }

    /// Gets the seconds left to confirm a pending request, if one is pending and
    /// unexpired at wall-clock time `now`.
    #[must_use]
    pub fn remaining(&self, now: f64) -> Option<f64> {
        match self.state {
            State::Awaiting { since } if now <= since + CONFIRM_WINDOW => {
                Some(since + CONFIRM_WINDOW - now)
            }
            _ => None,
        }
    }

    /// Clears any pending request. Idempotent.
    pub fn clear(&mut self) {
        self.state = State::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a new gate has nothing pending.
    #[test]
    fn new_gate_is_idle() {
        let gate = ConfirmGate::new();
        assert_eq!(gate.remaining(0.0), None);
    }

    /// Tests that the first request arms a window instead of confirming.
    #[test]
    fn first_request_arms() {
        let mut gate = ConfirmGate::new();

        assert_eq!(gate.request(0.0), Request::Armed);
        assert_eq!(gate.remaining(0.0), Some(CONFIRM_WINDOW));
    }

    /// Tests that a second request inside the window confirms.
    #[test]
    fn second_request_in_window_confirms() {
        let mut gate = ConfirmGate::new();

        assert_eq!(gate.request(0.0), Request::Armed);
        assert_eq!(gate.request(4.9), Request::Confirmed);
    }

    /// Tests that the window boundary itself still confirms.
    #[test]
    fn window_boundary_confirms() {
        let mut gate = ConfirmGate::new();

        assert_eq!(gate.request(0.0), Request::Armed);
        assert_eq!(gate.request(CONFIRM_WINDOW), Request::Confirmed);
    }

    /// Tests that a request after expiry re-arms a fresh window.
    #[test]
    fn expired_request_rearms() {
        let mut gate = ConfirmGate::new();

        assert_eq!(gate.request(0.0), Request::Armed);
        assert_eq!(gate.request(5.1), Request::Armed);

        // The fresh window starts at the new request time.
        let remaining = gate.remaining(5.1).unwrap();
        assert!((remaining - CONFIRM_WINDOW).abs() < 1e-9);
        assert_eq!(gate.request(10.0), Request::Confirmed);
    }

    /// Tests the countdown and its lazy expiry.
    #[test]
    fn remaining_counts_down_and_expires() {
        let mut gate = ConfirmGate::new();
        assert_eq!(gate.request(10.0), Request::Armed);

        let remaining = gate.remaining(12.5).unwrap();
        assert!((remaining - 2.5).abs() < 1e-9);

        assert_eq!(gate.remaining(15.0), Some(0.0));
        assert_eq!(gate.remaining(15.1), None);
    }

    /// Tests that clearing the gate is idempotent.
    #[test]
    fn clear_is_idempotent() {
        let mut gate = ConfirmGate::new();
        let _ = gate.request(0.0);

        gate.clear();
        assert_eq!(gate.remaining(0.0), None);
        gate.clear();
        assert_eq!(gate.remaining(0.0), None);
    }
}
