use embassy_stm32::exti::ExtiInput;

use super::traits::TickSource;
use crate::debounce::{ButtonId, SharedInputs};

/// Active-low push button on an EXTI line.
pub struct EdgeButton<'d> {
    pin: ExtiInput<'d>,
    id: ButtonId,
}

impl<'d> EdgeButton<'d> {
    pub fn new(pin: ExtiInput<'d>, id: ButtonId) -> Self {
        Self { pin, id }
    }

    pub fn is_pressed(&self) -> bool {
        self.pin.is_low()
    }

    /// Forwards every falling edge to `inputs`, stamped with `clock`.
    pub async fn watch<C: TickSource>(&mut self, inputs: &SharedInputs, clock: &C) {
        loop {
            self.pin.wait_for_falling_edge().await;
            let now = clock.now();
            if inputs.on_falling_edge(self.id, now) {
                defmt::debug!("{} edge accepted at {}", self.id, now);
            } else {
                defmt::trace!("{} edge bounced at {}", self.id, now);
            }
        }
    }
}
