//! Two PWM LEDs taking turns at 90% brightness.

use embedded_hal::pwm::SetDutyCycle;

use crate::config::{BLINK_INTERVAL_US, BLINK_ON_TIME_US, PWM_DUTY_90, PWM_DUTY_OFF, PWM_PERIOD_US};
use crate::error::{ChannelId, InitError};
use crate::hardware::pwm_led::PwmLed;
use crate::schedule::Countdown;

pub const FIRST_CHANNEL: ChannelId = 0;
pub const SECOND_CHANNEL: ChannelId = 1;

/// Which LED is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Phase {
    First,
    Second,
}

impl Phase {
    fn other(self) -> Self {
        match self {
            Phase::First => Phase::Second,
            Phase::Second => Phase::First,
        }
    }
}

pub struct AlternatingBlink<A, B> {
    first: PwmLed<A>,
    second: PwmLed<B>,
    next: Phase,
    countdown: Countdown,
}

impl<A, B> AlternatingBlink<A, B>
where
    A: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Opens both channels dark and arms the first countdown at `now_us`.
    ///
    /// The second channel is not touched if the first one fails.
    pub fn boot(first: Option<A>, second: Option<B>, now_us: u64) -> Result<Self, InitError> {
        let mut first = PwmLed::open(first, FIRST_CHANNEL, PWM_DUTY_OFF, PWM_PERIOD_US)?;
        let mut second = PwmLed::open(second, SECOND_CHANNEL, PWM_DUTY_OFF, PWM_PERIOD_US)?;
        first.turn_off();
        second.turn_off();

        Ok(Self {
            first,
            second,
            next: Phase::First,
            countdown: Countdown::new(now_us, BLINK_ON_TIME_US),
        })
    }

    /// Toggles and re-arms once the countdown has expired.
    pub fn poll(&mut self, now_us: u64) -> Option<Phase> {
        if !self.countdown.is_time_up(now_us) {
            return None;
        }
        let lit = self.toggle();
        self.countdown.start(now_us, BLINK_INTERVAL_US);
        Some(lit)
    }

    /// Lights the LED whose turn it is and darkens the other.
    pub fn toggle(&mut self) -> Phase {
        let lit = self.next;
        match lit {
            Phase::First => {
                self.first.set_level(PWM_DUTY_90);
                self.second.turn_off();
            }
            Phase::Second => {
                self.first.turn_off();
                self.second.set_level(PWM_DUTY_90);
            }
        }
        self.next = lit.other();
        lit
    }

    /// Microseconds until the next toggle.
    pub fn remaining(&self, now_us: u64) -> u64 {
        self.countdown.remaining(now_us)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Peripheral;
    use crate::hardware::pwm_led::tests::MockChannel;

    fn booted() -> (AlternatingBlink<MockChannel, MockChannel>, MockChannel, MockChannel) {
        let a = MockChannel::new(PWM_PERIOD_US);
        let b = MockChannel::new(PWM_PERIOD_US);
        let blink = AlternatingBlink::boot(Some(a.clone()), Some(b.clone()), 0).unwrap();
        (blink, a, b)
    }

    #[test]
    fn boots_with_both_leds_off() {
        let (_, a, b) = booted();
        assert_eq!(a.last(), Some(0));
        assert_eq!(b.last(), Some(0));
    }

    #[test]
    fn alternates_on_each_expiry() {
        let (mut blink, a, b) = booted();

        assert_eq!(blink.poll(999_999), None);
        assert_eq!(blink.poll(1_000_000), Some(Phase::First));
        assert_eq!((a.last(), b.last()), (Some(PWM_DUTY_90), Some(0)));

        assert_eq!(blink.poll(1_500_000), None);
        assert_eq!(blink.poll(2_000_000), Some(Phase::Second));
        assert_eq!((a.last(), b.last()), (Some(0), Some(PWM_DUTY_90)));

        assert_eq!(blink.poll(3_000_000), Some(Phase::First));
        assert_eq!((a.last(), b.last()), (Some(PWM_DUTY_90), Some(0)));
    }

    #[test]
    fn countdown_rearms_from_fire_time() {
        let (mut blink, _, _) = booted();
        assert_eq!(blink.poll(1_200_000), Some(Phase::First));
        assert_eq!(blink.remaining(1_200_000), BLINK_INTERVAL_US);
        assert_eq!(blink.poll(2_100_000), None);
        assert_eq!(blink.poll(2_200_000), Some(Phase::Second));
    }

    #[test]
    fn failed_first_channel_leaves_second_untouched() {
        let b = MockChannel::new(PWM_PERIOD_US);
        let result = AlternatingBlink::<MockChannel, _>::boot(None, Some(b.clone()), 0);
        assert_eq!(
            result.err(),
            Some(InitError::Open(Peripheral::Pwm(FIRST_CHANNEL)))
        );
        assert!(b.writes.borrow().is_empty());
    }

    #[test]
    fn failed_second_channel_is_fatal() {
        let a = MockChannel::new(PWM_PERIOD_US);
        let result = AlternatingBlink::<_, MockChannel>::boot(Some(a), None, 0);
        assert_eq!(
            result.err(),
            Some(InitError::Open(Peripheral::Pwm(SECOND_CHANNEL)))
        );
    }
}
