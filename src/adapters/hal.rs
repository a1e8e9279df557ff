//! embedded-hal adapter — any [`SetDutyCycle`] channel as an [`OutputPort`].
//!
//! HAL PWM channels are configured by construction (typestate), so
//! `configure_output` has nothing left to do.  The trait has no carrier
//! control either: the channel keeps the carrier its HAL timer was built
//! with, and `set_carrier_frequency` accepts the request without a fault
//! (logged once at `debug`).  Use [`HalPwmOutput::strict`] to have it
//! reported as [`ActuatorError::FrequencyUnsupported`] instead.

use embedded_hal::pwm::SetDutyCycle;
use log::debug;

use crate::app::ports::{FULL_SCALE, OutputPort, PinId};
use crate::error::ActuatorError;

pub struct HalPwmOutput<P> {
    pwm: P,
    strict_carrier: bool,
    carrier_ignored: bool,
}

impl<P: SetDutyCycle> HalPwmOutput<P> {
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            strict_carrier: false,
            carrier_ignored: false,
        }
    }

    /// Report carrier changes as [`ActuatorError::FrequencyUnsupported`].
    pub fn strict(pwm: P) -> Self {
        Self {
            strict_carrier: true,
            ..Self::new(pwm)
        }
    }

    pub fn inner(&self) -> &P {
        &self.pwm
    }

    pub fn into_inner(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> OutputPort for HalPwmOutput<P> {
    fn configure_output(&mut self, _pin: PinId) -> Result<(), ActuatorError> {
        Ok(())
    }

    fn write_level(&mut self, _pin: PinId, level: u8) -> Result<(), ActuatorError> {
        self.pwm
            .set_duty_cycle_fraction(u16::from(level), u16::from(FULL_SCALE))
            .map_err(|_| ActuatorError::PwmWriteFailed)
    }

    fn set_carrier_frequency(&mut self, pin: PinId, hz: u32) -> Result<(), ActuatorError> {
        if self.strict_carrier {
            return Err(ActuatorError::FrequencyUnsupported);
        }
        if !self.carrier_ignored {
            debug!("pin {}: HAL PWM has fixed carrier, ignoring {}Hz", pin, hz);
            self.carrier_ignored = true;
        }
        Ok(())
    }
}
