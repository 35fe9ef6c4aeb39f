//! Setpoint thermostat driven by three periodic tasks.
//!
//! | Task      | Period  | Effect                                          |
//! |-----------|---------|-------------------------------------------------|
//! | buttons   | 200 ms  | right press raises, left press lowers setpoint  |
//! | threshold | 500 ms  | heat on while temperature is below the setpoint |
//! | report    | 1000 ms | status line out, seconds counter advances       |
//!
//! All tasks due in one [`Thermostat::step`] see the same `now` and run in the
//! order of the table.

use crate::Ticks;
use crate::config::{
    BUTTON_CHECK_PERIOD_MS, DEFAULT_SETPOINT, DISPLAY_CHECK_PERIOD_MS, TEMP_CHECK_PERIOD_MS,
};
use crate::debounce::{ButtonId, SharedInputs};
use crate::error::{InitError, Peripheral};
use crate::hardware::traits::{Led, StatusSink, TemperatureSensor};
use crate::schedule::PeriodicTask;
use crate::status::{StatusBuffer, StatusLine};

/// Which tasks ran during one loop iteration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Fired {
    pub buttons: bool,
    pub threshold: bool,
    pub report: bool,
}

impl Fired {
    pub fn any(&self) -> bool {
        self.buttons || self.threshold || self.report
    }
}

pub struct Thermostat<S, L, W> {
    sensor: S,
    heat_led: L,
    serial: W,
    setpoint: i16,
    temperature: i16,
    heat: bool,
    seconds: u32,
    buttons: PeriodicTask,
    threshold: PeriodicTask,
    report: PeriodicTask,
    line: StatusBuffer,
}

impl<S, L, W> Thermostat<S, L, W>
where
    S: TemperatureSensor,
    L: Led,
    W: StatusSink,
{
    /// Brings the thermostat up on an opened serial link.
    ///
    /// `serial` is `None` when the UART could not be opened; no output is
    /// touched in that case. The heat LED is lit until the first threshold
    /// evaluation takes ownership of it.
    pub fn boot(sensor: S, mut heat_led: L, serial: Option<W>) -> Result<Self, InitError> {
        let serial = serial.ok_or(InitError::Open(Peripheral::Uart))?;
        heat_led.on();

        Ok(Self {
            sensor,
            heat_led,
            serial,
            setpoint: DEFAULT_SETPOINT,
            temperature: 0,
            heat: false,
            seconds: 0,
            buttons: PeriodicTask::new(BUTTON_CHECK_PERIOD_MS),
            threshold: PeriodicTask::new(TEMP_CHECK_PERIOD_MS),
            report: PeriodicTask::new(DISPLAY_CHECK_PERIOD_MS),
            line: StatusBuffer::new(),
        })
    }

    /// One pass of the polling loop against a single time snapshot.
    pub fn step(&mut self, now: Ticks, inputs: &SharedInputs) -> Fired {
        let mut fired = Fired::default();

        if self.buttons.poll(now) {
            self.adjust_setpoint(inputs);
            fired.buttons = true;
        }

        if self.threshold.poll(now) {
            self.evaluate_threshold();
            fired.threshold = true;
        }

        if self.report.poll(now) {
            self.report_status();
            fired.report = true;
        }

        fired
    }

    /// Applies pending button presses, right before left.
    pub fn adjust_setpoint(&mut self, inputs: &SharedInputs) {
        if inputs.take(ButtonId::Right) {
            self.setpoint = self.setpoint.saturating_add(1);
        }
        if inputs.take(ButtonId::Left) {
            self.setpoint = self.setpoint.saturating_sub(1);
        }
    }

    /// Samples the sensor and switches the heat output.
    pub fn evaluate_threshold(&mut self) {
        self.temperature = self.sensor.read_celsius();
        self.heat = self.temperature < self.setpoint;
        if self.heat {
            self.heat_led.on();
        } else {
            self.heat_led.off();
        }
    }

    /// Sends the status line, then counts the second.
    pub fn report_status(&mut self) {
        let status = self.status();
        // The buffer holds far more than the longest possible line.
        if status.render(&mut self.line).is_ok() {
            self.serial.write_line(&self.line);
        }
        self.seconds = self.seconds.wrapping_add(1);
    }

    pub fn status(&self) -> StatusLine {
        StatusLine {
            temperature: self.temperature,
            setpoint: self.setpoint,
            heat: self.heat,
            seconds: self.seconds,
        }
    }

    pub fn setpoint(&self) -> i16 {
        self.setpoint
    }

    pub fn heat(&self) -> bool {
        self.heat
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEBOUNCE_MS;
    use crate::sensor::SimulatedSensor;

    #[derive(Default)]
    struct FakeLed {
        lit: bool,
    }

    impl Led for FakeLed {
        fn on(&mut self) {
            self.lit = true;
        }

        fn off(&mut self) {
            self.lit = false;
        }

        fn toggle(&mut self) {
            self.lit = !self.lit;
        }

        fn is_on(&self) -> bool {
            self.lit
        }
    }

    #[derive(Default)]
    struct Captured(Vec<String>);

    impl StatusSink for Captured {
        fn write_line(&mut self, line: &str) {
            self.0.push(line.into());
        }
    }

    type TestThermostat = Thermostat<SimulatedSensor, FakeLed, Captured>;

    fn thermostat(celsius: i16) -> TestThermostat {
        Thermostat::boot(
            SimulatedSensor::new(celsius),
            FakeLed::default(),
            Some(Captured::default()),
        )
        .unwrap()
    }

    #[test]
    fn boot_lights_heat_led() {
        let t = thermostat(25);
        assert!(t.heat_led.is_on());
        assert_eq!(t.setpoint(), DEFAULT_SETPOINT);
        assert!(!t.heat());
    }

    #[test]
    fn failed_uart_open_runs_nothing() {
        let result: Result<TestThermostat, _> =
            Thermostat::boot(SimulatedSensor::new(25), FakeLed::default(), None);
        assert_eq!(result.err(), Some(InitError::Open(Peripheral::Uart)));
    }

    #[test]
    fn right_press_raises_setpoint_on_next_button_check() {
        let inputs = SharedInputs::new(DEBOUNCE_MS);
        let mut t = thermostat(25);
        assert!(inputs.on_falling_edge(ButtonId::Right, 120));

        let fired = t.step(150, &inputs);
        assert!(!fired.any());
        assert_eq!(t.setpoint(), 25);

        let fired = t.step(200, &inputs);
        assert!(fired.buttons);
        assert_eq!(t.setpoint(), 26);
        assert!(!inputs.channel(ButtonId::Right).flag().is_raised());
    }

    #[test]
    fn left_and_right_in_one_window_cancel_out() {
        let inputs = SharedInputs::new(DEBOUNCE_MS);
        let mut t = thermostat(25);
        assert!(inputs.on_falling_edge(ButtonId::Right, 100));
        assert!(inputs.on_falling_edge(ButtonId::Left, 110));
        t.step(200, &inputs);
        assert_eq!(t.setpoint(), 25);
        assert!(!inputs.take(ButtonId::Left));
        assert!(!inputs.take(ButtonId::Right));
    }

    #[test]
    fn bounced_edges_count_once() {
        let inputs = SharedInputs::new(DEBOUNCE_MS);
        let mut t = thermostat(25);
        for now in [100, 110, 130, 150] {
            inputs.on_falling_edge(ButtonId::Left, now);
        }
        t.step(200, &inputs);
        assert_eq!(t.setpoint(), 24);
        t.step(400, &inputs);
        assert_eq!(t.setpoint(), 24);
    }

    #[test]
    fn heat_follows_setpoint_comparison() {
        let inputs = SharedInputs::new(DEBOUNCE_MS);
        let mut t = thermostat(25);

        let fired = t.step(500, &inputs);
        assert!(fired.threshold);
        assert!(!t.heat());
        assert!(!t.heat_led.is_on());

        inputs.on_falling_edge(ButtonId::Right, 520);
        t.step(700, &inputs);
        assert_eq!(t.setpoint(), 26);
        // threshold not due again until 1000
        assert!(!t.heat());

        t.step(1000, &inputs);
        assert!(t.heat());
        assert!(t.heat_led.is_on());
    }

    #[test]
    fn report_emits_line_and_counts_seconds() {
        let inputs = SharedInputs::new(DEBOUNCE_MS);
        let mut t = thermostat(25);
        inputs.on_falling_edge(ButtonId::Right, 60);

        let fired = t.step(1000, &inputs);
        assert_eq!(
            fired,
            Fired {
                buttons: true,
                threshold: true,
                report: true
            }
        );
        t.step(2000, &inputs);

        assert_eq!(t.serial.0, ["<25,26,1,0000>\n", "<25,26,1,0001>\n"]);
        assert_eq!(t.seconds(), 2);
    }

    #[test]
    fn tasks_run_in_catalogue_order_within_one_snapshot() {
        let inputs = SharedInputs::new(DEBOUNCE_MS);
        let mut t = thermostat(25);
        inputs.on_falling_edge(ButtonId::Right, 900);

        // setpoint is adjusted before the threshold check and the report
        t.step(1000, &inputs);
        assert!(t.heat());
        assert_eq!(t.serial.0, ["<25,26,1,0000>\n"]);
    }

    #[test]
    fn late_loop_shifts_later_deadlines() {
        let inputs = SharedInputs::new(DEBOUNCE_MS);
        let mut t = thermostat(25);
        assert!(t.step(1300, &inputs).report);
        assert!(!t.step(2000, &inputs).report);
        assert!(t.step(2300, &inputs).report);
        assert_eq!(t.seconds(), 2);
    }
}
