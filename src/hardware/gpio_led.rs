use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use super::traits::Led;

/// On/off LED on a push-pull pin.
///
/// The Blue Pill's PC13 LED sinks current, so it lights on a low level;
/// construct with `active_low = true` for it.
pub struct GpioLed<P> {
    pin: P,
    active_low: bool,
    lit: bool,
}

impl<P> GpioLed<P>
where
    P: OutputPin<Error = Infallible>,
{
    /// Wraps `pin` and drives it to the unlit level.
    pub fn new(pin: P, active_low: bool) -> Self {
        let mut led = Self {
            pin,
            active_low,
            lit: true,
        };
        led.off();
        led
    }

    fn drive(&mut self, lit: bool) {
        let Ok(()) = if lit != self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        self.lit = lit;
    }
}

impl<P> Led for GpioLed<P>
where
    P: OutputPin<Error = Infallible>,
{
    fn on(&mut self) {
        self.drive(true);
    }

    fn off(&mut self) {
        self.drive(false);
    }

    fn toggle(&mut self) {
        self.drive(!self.lit);
    }

    fn is_on(&self) -> bool {
        self.lit
    }
}
