//! Polling-loop firmware building blocks for the STM32F103 "Blue Pill".
//!
//! Two programs live in `src/bin`:
//! - `thermostat`: buttons adjust a setpoint, a simulated sensor is compared
//!   against it, a LED shows the heat state and a status line goes out over
//!   USART1 once per second.
//! - `pwm_blink`: two PWM LEDs take turns at 90% brightness.
//!
//! Everything that does not touch a register lives in host-portable modules so
//! the loop arithmetic can be unit tested off-target.

#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod config;
pub mod debounce;
pub mod error;
pub mod hardware;
pub mod schedule;
pub mod sensor;
pub mod status;
pub mod thermostat;

/// Millisecond tick count read from the elapsed-time counter.
pub type Ticks = u32;
