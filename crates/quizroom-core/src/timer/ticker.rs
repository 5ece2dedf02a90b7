//! Wall-clock to whole-second tick conversion.
//!
//! Interval sources drift: a one-second interval may fire late, or twice in
//! quick succession after a stall. `Ticker` measures real elapsed time through
//! a [`Clock`] and reports how many full seconds passed since the last poll,
//! carrying the sub-second remainder forward.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Source of milliseconds. Only differences between readings matter.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Milliseconds since the clock was created, read from [`Instant`].
///
/// Unaffected by wall-clock adjustments (NTP, manual changes).
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-advanced clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance_ms(secs.saturating_mul(1000));
    }

    /// Jump to an absolute reading, forwards or backwards.
    pub fn set_ms(&self, ms: u64) {
        self.now.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct Ticker<C: Clock> {
    clock: C,
    /// Timestamp up to which elapsed seconds have been reported.
    anchor_ms: u64,
}

impl<C: Clock> Ticker<C> {
    pub fn new(clock: C) -> Self {
        let anchor_ms = clock.now_ms();
        Self { clock, anchor_ms }
    }

    /// Re-anchor at the current time, dropping any partial second.
    pub fn reset(&mut self) {
        self.anchor_ms = self.clock.now_ms();
    }

    /// Number of whole seconds elapsed since the last accounted second.
    ///
    /// A clock that reads earlier than the anchor re-anchors at the new
    /// reading, so counting resumes instead of waiting for the old time.
    pub fn poll(&mut self) -> u32 {
        let now = self.clock.now_ms();
        if now < self.anchor_ms {
            self.anchor_ms = now;
            return 0;
        }
        let elapsed = now.saturating_sub(self.anchor_ms);
        let secs = elapsed / 1000;
        self.anchor_ms = self.anchor_ms.saturating_add(secs * 1000);
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_whole_seconds_and_carries_remainder() {
        let clock = ManualClock::new(10_000);
        let mut ticker = Ticker::new(clock.clone());

        clock.advance_ms(999);
        assert_eq!(ticker.poll(), 0);

        clock.advance_ms(1);
        assert_eq!(ticker.poll(), 1);

        clock.advance_ms(1_500);
        assert_eq!(ticker.poll(), 1);
        clock.advance_ms(500);
        assert_eq!(ticker.poll(), 1);
    }

    #[test]
    fn catches_up_after_stall() {
        let clock = ManualClock::new(0);
        let mut ticker = Ticker::new(clock.clone());
        clock.advance_secs(7);
        assert_eq!(ticker.poll(), 7);
        assert_eq!(ticker.poll(), 0);
    }

    #[test]
    fn reset_drops_partial_second() {
        let clock = ManualClock::new(0);
        let mut ticker = Ticker::new(clock.clone());
        clock.advance_ms(900);
        ticker.reset();
        clock.advance_ms(900);
        assert_eq!(ticker.poll(), 0);
    }

    #[test]
    fn backward_step_does_not_stall_counting() {
        let clock = ManualClock::new(3_600_000);
        let mut ticker = Ticker::new(clock.clone());
        clock.advance_ms(500);

        clock.set_ms(0);
        assert_eq!(ticker.poll(), 0);

        clock.advance_secs(2);
        assert_eq!(ticker.poll(), 2);
        clock.advance_ms(1_200);
        assert_eq!(ticker.poll(), 1);
    }

    #[test]
    fn frequent_polls_still_count_whole_seconds() {
        let clock = ManualClock::new(0);
        let mut ticker = Ticker::new(clock.clone());
        let mut ticks = Vec::new();
        for _ in 0..15 {
            clock.advance_ms(200);
            ticks.push(ticker.poll());
        }
        assert_eq!(ticks.iter().sum::<u32>(), 3);
        assert_eq!(ticks.iter().filter(|&&n| n == 1).count(), 3);
        assert_eq!(ticks[4], 1);
    }

    #[test]
    fn monotonic_clock_starts_near_zero_and_never_goes_back() {
        let clock = MonotonicClock::new();
        let first = clock.now_ms();
        let second = clock.now_ms();
        assert!(first < 60_000);
        assert!(second >= first);

        let mut ticker = Ticker::new(clock);
        assert_eq!(ticker.poll(), 0);
    }
}
