//! Compile-time configuration shared by both programs.
//!
//! Millisecond values are compared against the elapsed-time counter,
//! microsecond values drive the PWM timer and the blink countdown.

use crate::Ticks;

// ── Thermostat ──────────────────────────────────────────────────────────────

/// Minimum spacing between two accepted button edges.
pub const DEBOUNCE_MS: Ticks = 50;

/// Setpoint adjustment task period.
pub const BUTTON_CHECK_PERIOD_MS: Ticks = 200;

/// Threshold evaluation task period.
pub const TEMP_CHECK_PERIOD_MS: Ticks = 500;

/// Status report task period.
pub const DISPLAY_CHECK_PERIOD_MS: Ticks = 1000;

/// Resolution of the hardware timer backing the elapsed-time counter.
pub const TIMER_PERIOD_MS: Ticks = 100;

pub const UART_BAUD_RATE: u32 = 115_200;

pub const DEFAULT_SETPOINT: i16 = 25;

/// Value returned by the simulated temperature sensor.
pub const SIMULATED_TEMPERATURE: i16 = 25;

/// Size of the status line buffer.
pub const STATUS_BUFFER_LEN: usize = 64;

// ── PWM blink ───────────────────────────────────────────────────────────────

/// PWM period in microseconds (about 333 Hz).
pub const PWM_PERIOD_US: u16 = 3000;

/// 90% of [`PWM_PERIOD_US`].
pub const PWM_DUTY_90: u16 = 2700;

pub const PWM_DUTY_OFF: u16 = 0;

pub const BLINK_ON_TIME_US: u64 = 1_000_000;
pub const BLINK_OFF_TIME_US: u64 = 1_000_000;
pub const BLINK_INTERVAL_US: u64 = 1_000_000;

/// PWM output frequency derived from [`PWM_PERIOD_US`].
pub const fn pwm_frequency_hz() -> u32 {
    1_000_000 / PWM_PERIOD_US as u32
}
