//! Serial status line `<TT,SS,H,SSSS>\n`.

use core::fmt::{self, Write};

use heapless::String;

use crate::config::STATUS_BUFFER_LEN;

pub type StatusBuffer = String<STATUS_BUFFER_LEN>;

/// Snapshot of the thermostat as reported once per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct StatusLine {
    pub temperature: i16,
    pub setpoint: i16,
    pub heat: bool,
    pub seconds: u32,
}

impl StatusLine {
    /// Replaces the contents of `buf` with the rendered line.
    pub fn render(&self, buf: &mut StatusBuffer) -> fmt::Result {
        buf.clear();
        write!(buf, "{self}")
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<{:02},{:02},{},{:04}>",
            self.temperature,
            self.setpoint,
            u8::from(self.heat),
            self.seconds
        )
    }
}
