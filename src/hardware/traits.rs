use crate::Ticks;

pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
    fn toggle(&mut self);
    fn is_on(&self) -> bool;
}

/// Free-running elapsed-time counter.
pub trait TickSource {
    fn now(&self) -> Ticks;
}

pub trait TemperatureSensor {
    /// Current temperature in whole degrees Celsius.
    fn read_celsius(&mut self) -> i16;
}

/// Outbound line transport for status reports.
pub trait StatusSink {
    fn write_line(&mut self, line: &str);
}
