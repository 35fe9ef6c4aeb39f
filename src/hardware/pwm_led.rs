//! PWM-dimmed LED bound to one timer channel.
//!
//! Levels are given in the same unit as the configured period (microseconds
//! of on-time per period), so `set_level(period)` is fully on and
//! `set_level(0)` is off.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::{ChannelId, InitError, Peripheral};

pub struct PwmLed<C> {
    handle: Option<C>,
    channel: ChannelId,
    period: u16,
}

impl<C> PwmLed<C>
where
    C: SetDutyCycle,
{
    /// Takes ownership of an opened channel and starts it at `duty`.
    ///
    /// `handle` is `None` when the driver could not hand out the channel.
    pub fn open(
        handle: Option<C>,
        channel: ChannelId,
        duty: u16,
        period: u16,
    ) -> Result<Self, InitError> {
        let handle = handle.ok_or(InitError::Open(Peripheral::Pwm(channel)))?;
        if period == 0 {
            return Err(InitError::InvalidPeriod(channel));
        }

        let mut led = Self {
            handle: Some(handle),
            channel,
            period,
        };
        led.apply(duty)
            .map_err(|_| InitError::Start(Peripheral::Pwm(channel)))?;
        Ok(led)
    }

    fn apply(&mut self, duty: u16) -> Result<(), C::Error> {
        match self.handle.as_mut() {
            Some(handle) => handle.set_duty_cycle_fraction(duty.min(self.period), self.period),
            None => Ok(()),
        }
    }

    /// Sets on-time per period, clamped to the period. Does nothing once the
    /// channel has been released.
    pub fn set_level(&mut self, duty: u16) {
        // Duty writes on an enabled channel cannot fail on this timer.
        let _ = self.apply(duty);
    }

    pub fn turn_on(&mut self) {
        self.set_level(self.period);
    }

    pub fn turn_off(&mut self) {
        self.set_level(0);
    }

    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    pub fn period(&self) -> u16 {
        self.period
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Hands the channel back to the caller.
    pub fn release(&mut self) -> Option<C> {
        self.handle.take()
    }
}
