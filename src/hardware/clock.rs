use embassy_time::Instant;

use super::traits::TickSource;
use crate::Ticks;

/// Elapsed-time counter backed by the embassy time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    /// Microseconds since boot, for countdowns finer than a tick.
    pub fn micros(&self) -> u64 {
        Instant::now().as_micros()
    }
}

impl TickSource for EmbassyClock {
    fn now(&self) -> Ticks {
        Instant::now().as_millis() as Ticks
    }
}
