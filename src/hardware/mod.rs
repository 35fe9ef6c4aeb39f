pub mod gpio_led;
pub mod pwm_led;
pub mod traits;

#[cfg(target_os = "none")]
pub mod clock;
#[cfg(target_os = "none")]
pub mod gpio_button;
#[cfg(target_os = "none")]
pub mod serial;

#[cfg(target_os = "none")]
pub use self::halt::halt;

#[cfg(target_os = "none")]
mod halt {
    use crate::error::InitError;

    /// Stops the firmware after a failed bring-up. Never returns to a loop
    /// that would run with a missing peripheral.
    pub fn halt(err: InitError) -> ! {
        defmt::error!("init failed: {}", err);
        defmt::panic!("halted")
    }
}
