//! STM32 Blue Pill Alternating PWM LED Example
//!
//! Two LEDs on TIM3 take turns: one at 90% duty, the other dark, swapping
//! every second. The loop busy-polls a countdown, no sleeping.
//!
//! Hardware Connections:
//!   - LED A: PA6 (TIM3_CH1) through a resistor to GND
//!   - LED B: PA7 (TIM3_CH2) through a resistor to GND
//!
//! Expected Behavior:
//!   - Both LEDs dark for the first second
//!   - Then A bright / B dark, A dark / B bright, ... once per second

#![no_std]
#![no_main]

use bluepill_loops::{
    blink::AlternatingBlink,
    config::pwm_frequency_hz,
    hardware::{self, clock::EmbassyClock},
};
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_stm32::{
    gpio::OutputType,
    time::Hertz,
    timer::{
        low_level::CountingMode,
        simple_pwm::{PwmPin, SimplePwm},
    },
};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    defmt::info!("pwm blink starting");

    let pwm = SimplePwm::new(
        p.TIM3,
        Some(PwmPin::new_ch1(p.PA6, OutputType::PushPull)),
        Some(PwmPin::new_ch2(p.PA7, OutputType::PushPull)),
        None,
        None,
        Hertz::hz(pwm_frequency_hz()),
        CountingMode::EdgeAlignedUp,
    );
    let mut channels = pwm.split();
    channels.ch1.enable();
    channels.ch2.enable();
    defmt::debug!("TIM3 max duty {}", channels.ch1.max_duty_cycle());

    let clock = EmbassyClock;
    let mut blink =
        match AlternatingBlink::boot(Some(channels.ch1), Some(channels.ch2), clock.micros()) {
            Ok(blink) => blink,
            Err(err) => hardware::halt(err),
        };

    loop {
        if let Some(lit) = blink.poll(clock.micros()) {
            defmt::info!("lit: {}", lit);
        }
        yield_now().await;
    }
}
