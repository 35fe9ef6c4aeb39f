//! STM32 Blue Pill Polling-Loop Thermostat
//!
//! A single loop polls three periodic tasks against one timestamp per pass:
//! 1. every 200ms apply pending setpoint button presses
//! 2. every 500ms compare the (simulated) temperature with the setpoint and
//!    switch the heat LED
//! 3. every 1000ms send `<TT,SS,H,SSSS>\n` over USART1
//!
//! Hardware Connections:
//!   - Heat LED: PC13 (onboard, lit when low)
//!   - Left button (setpoint down): PA0 to GND, internal pull-up
//!   - Right button (setpoint up): PA1 to GND, internal pull-up
//!   - USART1 TX: PA9, 115200 8N1

#![no_std]
#![no_main]

use bluepill_loops::{
    config::{DEBOUNCE_MS, SIMULATED_TEMPERATURE, UART_BAUD_RATE},
    debounce::{ButtonId, SharedInputs},
    hardware::{
        self, clock::EmbassyClock, gpio_button::EdgeButton, gpio_led::GpioLed,
        serial::UartStatus, traits::TickSource,
    },
    sensor::SimulatedSensor,
    thermostat::Thermostat,
};
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_stm32::{
    exti::ExtiInput,
    gpio::{Level, Output, Pull, Speed},
    usart::{self, UartTx},
};
use {defmt_rtt as _, panic_probe as _};

// Button flags and debounce stamps, shared by the edge watchers and the loop
static INPUTS: SharedInputs = SharedInputs::new(DEBOUNCE_MS);

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    defmt::info!("thermostat starting");

    let mut uart_config = usart::Config::default();
    uart_config.baudrate = UART_BAUD_RATE;
    let serial = UartTx::new_blocking(p.USART1, p.PA9, uart_config)
        .inspect_err(|err| defmt::error!("USART1 config rejected: {}", err))
        .ok()
        .map(UartStatus::new);

    // PC13 LED sinks current
    let heat_led = GpioLed::new(Output::new(p.PC13, Level::High, Speed::Low), true);

    let mut thermostat = match Thermostat::boot(
        SimulatedSensor::new(SIMULATED_TEMPERATURE),
        heat_led,
        serial,
    ) {
        Ok(thermostat) => thermostat,
        Err(err) => hardware::halt(err),
    };

    let left = EdgeButton::new(ExtiInput::new(p.PA0, p.EXTI0, Pull::Up), ButtonId::Left);
    let right = EdgeButton::new(ExtiInput::new(p.PA1, p.EXTI1, Pull::Up), ButtonId::Right);
    if left.is_pressed() || right.is_pressed() {
        defmt::warn!("button held at boot, first press will be missed");
    }
    defmt::unwrap!(spawner.spawn(button_edges(left, EmbassyClock)));
    defmt::unwrap!(spawner.spawn(button_edges(right, EmbassyClock)));

    defmt::info!("setpoint {}", thermostat.setpoint());

    let clock = EmbassyClock;
    let mut heat = thermostat.heat();
    let mut setpoint = thermostat.setpoint();

    loop {
        let fired = thermostat.step(clock.now(), &INPUTS);

        if fired.buttons && thermostat.setpoint() != setpoint {
            setpoint = thermostat.setpoint();
            defmt::info!("setpoint {}", setpoint);
        }
        if fired.threshold && thermostat.heat() != heat {
            heat = thermostat.heat();
            defmt::info!("heat {}", if heat { "on" } else { "off" });
        }
        if fired.report {
            defmt::debug!("{}", thermostat.status());
        }

        // let the edge watchers run, then poll again
        yield_now().await;
    }
}

/// Edge watcher for one button; sets its flag in [`INPUTS`].
#[embassy_executor::task(pool_size = 2)]
async fn button_edges(mut button: EdgeButton<'static>, clock: EmbassyClock) {
    button.watch(&INPUTS, &clock).await
}
