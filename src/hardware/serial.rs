use embassy_stm32::{mode::Blocking, usart::UartTx};

use super::traits::StatusSink;

/// Status lines over a blocking UART transmitter.
pub struct UartStatus<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> UartStatus<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl StatusSink for UartStatus<'_> {
    fn write_line(&mut self, line: &str) {
        if let Err(err) = self.tx.blocking_write(line.as_bytes()) {
            defmt::warn!("status write failed: {}", err);
        }
    }
}
