//! LEDC hardware adapter — bridges one LEDC channel to [`OutputPort`].
//!
//! Each relay output owns one LEDC channel.  Channels that share a timer
//! share its carrier frequency, so give every relay that needs its own
//! hold frequency a dedicated timer.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real LEDC registers via hw_init.
//! On host/test: hw_init is a no-op and only the in-memory state changes.

use log::warn;

use crate::app::ports::{OutputPort, PinId};
use crate::drivers::hw_init;
use crate::error::ActuatorError;

/// One LEDC channel bound to one relay pin.
pub struct LedcOutput {
    channel: u32,
    timer: u32,
    initial_freq_hz: u32,
    attached: bool,
    level: u8,
    frequency_hz: u32,
}

impl LedcOutput {
    /// `initial_freq_hz` is the carrier programmed when the pin is attached;
    /// the pulse phase runs at this frequency until the first hold.
    pub fn new(channel: u32, timer: u32, initial_freq_hz: u32) -> Self {
        Self {
            channel,
            timer,
            initial_freq_hz,
            attached: false,
            level: 0,
            frequency_hz: initial_freq_hz,
        }
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Last level successfully written.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Carrier frequency currently programmed on the timer.
    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }
}

impl OutputPort for LedcOutput {
    fn configure_output(&mut self, pin: PinId) -> Result<(), ActuatorError> {
        hw_init::ledc_attach(self.channel, self.timer, pin, self.initial_freq_hz).map_err(|e| {
            warn!("LEDC attach GPIO{}: {}", pin, e);
            ActuatorError::PinConfigFailed
        })?;
        self.attached = true;
        self.frequency_hz = self.initial_freq_hz;
        Ok(())
    }

    fn write_level(&mut self, pin: PinId, level: u8) -> Result<(), ActuatorError> {
        hw_init::ledc_set(self.channel, level).map_err(|e| {
            warn!("LEDC duty GPIO{}: {}", pin, e);
            ActuatorError::PwmWriteFailed
        })?;
        self.level = level;
        Ok(())
    }

    fn set_carrier_frequency(&mut self, pin: PinId, hz: u32) -> Result<(), ActuatorError> {
        if hz == self.frequency_hz {
            return Ok(());
        }
        hw_init::ledc_set_frequency(self.timer, hz).map_err(|e| {
            warn!("LEDC frequency GPIO{}: {}", pin, e);
            ActuatorError::FrequencyChangeFailed
        })?;
        self.frequency_hz = hz;
        Ok(())
    }
}
