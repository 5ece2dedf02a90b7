//! Single-shot, cancelable countdown.
//!
//! The countdown does not use internal threads - the owner is responsible for
//! calling `tick()` once per elapsed second (see [`super::Ticker`] for turning
//! wall-clock time into ticks).
//!
//! ## State Transitions
//!
//! ```text
//! Stopped -> Running -> (Expired | Canceled) -> Stopped
//! ```
//!
//! Expiry and cancellation are mutually exclusive: once either happens the
//! countdown reports nothing further until the next `start()`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut countdown = Countdown::new();
//! countdown.start(30);
//! // Once per second:
//! match countdown.tick() {
//!     Some(CountdownSignal::Tick { remaining }) => { /* render */ }
//!     Some(CountdownSignal::Expired) => { /* resolve as timed out */ }
//!     None => {}
//! }
//! ```

use serde::{Deserialize, Serialize};

/// What a single elapsed second produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CountdownSignal {
    /// One second elapsed; `remaining` is the new value and is above zero.
    Tick { remaining: u32 },
    /// The countdown reached zero. Reported exactly once per `start()`.
    Expired,
}

/// Countdown capability the quiz machine depends on.
///
/// Implementations must guarantee that `Expired` is reported at most once per
/// `start()` and never after `cancel()`.
pub trait CountdownTimer {
    /// Cancel any running countdown, then begin again from `duration_secs`.
    fn start(&mut self, duration_secs: u32);

    /// Stop if running. Idempotent.
    fn cancel(&mut self);

    /// Account for one elapsed second.
    fn tick(&mut self) -> Option<CountdownSignal>;

    fn remaining(&self) -> u32;

    fn is_running(&self) -> bool;
}

/// Standard whole-second countdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CountdownTimer for Countdown {
    fn start(&mut self, duration_secs: u32) {
        self.cancel();
        self.remaining = duration_secs;
        self.running = true;
    }

    fn cancel(&mut self) {
        self.running = false;
    }

    fn tick(&mut self) -> Option<CountdownSignal> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return Some(CountdownSignal::Expired);
        }
        Some(CountdownSignal::Tick {
            remaining: self.remaining,
        })
    }

    fn remaining(&self) -> u32 {
        self.remaining
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_then_expires_once() {
        let mut c = Countdown::new();
        c.start(3);
        assert_eq!(c.tick(), Some(CountdownSignal::Tick { remaining: 2 }));
        assert_eq!(c.tick(), Some(CountdownSignal::Tick { remaining: 1 }));
        assert_eq!(c.tick(), Some(CountdownSignal::Expired));
        assert!(!c.is_running());
        assert_eq!(c.remaining(), 0);

        // Tick source keeps firing: nothing more, never negative.
        for _ in 0..5 {
            assert_eq!(c.tick(), None);
        }
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn cancel_is_idempotent_and_suppresses_expiry() {
        let mut c = Countdown::new();
        c.start(2);
        c.tick();
        c.cancel();
        c.cancel();
        assert_eq!(c.tick(), None);
        assert_eq!(c.tick(), None);
        assert_eq!(c.remaining(), 1);
    }

    #[test]
    fn restart_replaces_running_countdown() {
        let mut c = Countdown::new();
        c.start(2);
        c.tick();
        c.start(5);
        assert_eq!(c.remaining(), 5);
        assert_eq!(c.tick(), Some(CountdownSignal::Tick { remaining: 4 }));
    }

    #[test]
    fn zero_duration_expires_on_first_tick() {
        let mut c = Countdown::new();
        c.start(0);
        assert_eq!(c.tick(), Some(CountdownSignal::Expired));
        assert_eq!(c.tick(), None);
    }

    #[test]
    fn idle_countdown_never_ticks() {
        let mut c = Countdown::new();
        assert_eq!(c.tick(), None);
        assert!(!c.is_running());
    }
}
