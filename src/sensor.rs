use crate::hardware::traits::TemperatureSensor;

/// Stand-in for the board's temperature sensor; always reads the same value.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSensor {
    celsius: i16,
}

impl SimulatedSensor {
    pub const fn new(celsius: i16) -> Self {
        Self { celsius }
    }
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new(crate::config::SIMULATED_TEMPERATURE)
    }
}

impl TemperatureSensor for SimulatedSensor {
    fn read_celsius(&mut self) -> i16 {
        self.celsius
    }
}
