//! Boot-time failures.
//!
//! Nothing fails once the loop runs; the only error the firmware knows is a
//! peripheral that could not be brought up. Constructors return it and the
//! entry point halts.

use thiserror::Error;

/// PWM channel number on the blink timer.
pub type ChannelId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Peripheral {
    Uart,
    Pwm(ChannelId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum InitError {
    #[error("{0:?} could not be opened")]
    Open(Peripheral),
    #[error("{0:?} did not start")]
    Start(Peripheral),
    #[error("PWM channel {0} configured with a zero period")]
    InvalidPeriod(ChannelId),
}
