//! Debounced edge inputs shared between the edge watchers and the main loop.
//!
//! Each button owns a one-bit [`InputFlag`] and the tick of its last accepted
//! edge. The watcher side only ever raises the flag; the loop side takes it
//! with an atomic swap, so an edge racing the read is either seen now or on
//! the next check, never lost twice and never counted twice. Edges arriving
//! while a flag is already pending coalesce into that single event.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::Ticks;

/// Which of the two setpoint buttons produced an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum ButtonId {
    Left,
    Right,
}

/// At-most-one-pending event bit.
#[derive(Debug, Default)]
pub struct InputFlag(AtomicBool);

impl InputFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Read-and-clear.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

/// Flag plus debounce state for one button.
#[derive(Debug)]
pub struct InputChannel {
    flag: InputFlag,
    last_accepted: AtomicU32,
    interval: Ticks,
}

impl InputChannel {
    pub const fn new(interval: Ticks) -> Self {
        Self {
            flag: InputFlag::new(),
            last_accepted: AtomicU32::new(0),
            interval,
        }
    }

    /// Accepts the edge if strictly more than `interval` ticks passed since
    /// the last accepted one. Rejected edges leave all state untouched.
    pub fn on_edge(&self, now: Ticks) -> bool {
        let last = self.last_accepted.load(Ordering::Acquire);
        if now.wrapping_sub(last) > self.interval {
            self.flag.raise();
            self.last_accepted.store(now, Ordering::Release);
            true
        } else {
            false
        }
    }

    pub fn flag(&self) -> &InputFlag {
        &self.flag
    }

    pub fn last_accepted(&self) -> Ticks {
        self.last_accepted.load(Ordering::Acquire)
    }
}

/// Shared input context for the thermostat, meant to live in a `static`.
#[derive(Debug)]
pub struct SharedInputs {
    left: InputChannel,
    right: InputChannel,
}

impl SharedInputs {
    pub const fn new(debounce: Ticks) -> Self {
        Self {
            left: InputChannel::new(debounce),
            right: InputChannel::new(debounce),
        }
    }

    pub fn channel(&self, button: ButtonId) -> &InputChannel {
        match button {
            ButtonId::Left => &self.left,
            ButtonId::Right => &self.right,
        }
    }

    /// Falling-edge entry point for the edge watchers.
    pub fn on_falling_edge(&self, button: ButtonId, now: Ticks) -> bool {
        self.channel(button).on_edge(now)
    }

    /// Read-and-clear the pending event of one button.
    pub fn take(&self, button: ButtonId) -> bool {
        self.channel(button).flag().take()
    }
}
