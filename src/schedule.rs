//! Period gating for the polling loops.
//!
//! [`PeriodicTask`] is checked against the shared millisecond counter, the
//! [`Countdown`] keeps its own start stamp on a microsecond clock.

use crate::Ticks;

/// One entry of a loop's task catalogue.
///
/// A task is due once `now - last_run >= period`. Firing stores `now` as the
/// new `last_run`, so any lateness of the loop is carried into the next
/// period instead of being caught up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct PeriodicTask {
    period: Ticks,
    last_run: Ticks,
}

impl PeriodicTask {
    /// A task that has notionally last run at tick 0.
    pub const fn new(period: Ticks) -> Self {
        Self {
            period,
            last_run: 0,
        }
    }

    pub const fn period(&self) -> Ticks {
        self.period
    }

    pub const fn last_run(&self) -> Ticks {
        self.last_run
    }

    pub fn is_due(&self, now: Ticks) -> bool {
        now.wrapping_sub(self.last_run) >= self.period
    }

    /// Returns `true` and records `now` as the last run if the task is due.
    pub fn poll(&mut self, now: Ticks) -> bool {
        if self.is_due(now) {
            self.last_run = now;
            true
        } else {
            false
        }
    }
}

/// One-shot interval timer that is re-armed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Countdown {
    started_at: u64,
    interval: u64,
}

impl Countdown {
    pub const fn new(now: u64, interval: u64) -> Self {
        Self {
            started_at: now,
            interval,
        }
    }

    pub fn start(&mut self, now: u64, interval: u64) {
        self.started_at = now;
        self.interval = interval;
    }

    pub fn is_time_up(&self, now: u64) -> bool {
        now.saturating_sub(self.started_at) >= self.interval
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self, now: u64) -> u64 {
        self.interval.saturating_sub(now.saturating_sub(self.started_at))
    }
}
