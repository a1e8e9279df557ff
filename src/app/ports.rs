//! Port traits — the hexagonal boundary between the relay logic and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RelayDriver (domain)
//! ```
//!
//! Driven adapters (LEDC channel, embedded-hal PWM, system timer) implement
//! these traits.  [`RelayDriver`](crate::drivers::relay::RelayDriver)
//! consumes them via generics, so the state machine never touches registers
//! directly and can be exercised on the host with a simulated clock.

use crate::error::ActuatorError;

/// Physical output identifier (GPIO number on the ESP32 family).
pub type PinId = i32;

/// Full-scale output level: rail fully on.
pub const FULL_SCALE: u8 = u8::MAX;

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the driver calls this to shape the physical output.
///
/// Every call is a single synchronous register write.  Implementations
/// must not block; failures are returned and the caller decides whether
/// to report them.
pub trait OutputPort {
    /// One-time output-mode configuration for `pin`.
    fn configure_output(&mut self, pin: PinId) -> Result<(), ActuatorError>;

    /// Write a duty-cycle level, `0` (off) ..= [`FULL_SCALE`] (fully on).
    fn write_level(&mut self, pin: PinId, level: u8) -> Result<(), ActuatorError>;

    /// Set the PWM carrier frequency for `pin`.
    fn set_carrier_frequency(&mut self, pin: PinId, hz: u32) -> Result<(), ActuatorError>;
}

impl<T: OutputPort + ?Sized> OutputPort for &mut T {
    fn configure_output(&mut self, pin: PinId) -> Result<(), ActuatorError> {
        (**self).configure_output(pin)
    }

    fn write_level(&mut self, pin: PinId, level: u8) -> Result<(), ActuatorError> {
        (**self).write_level(pin, level)
    }

    fn set_carrier_frequency(&mut self, pin: PinId, hz: u32) -> Result<(), ActuatorError> {
        (**self).set_carrier_frequency(pin, hz)
    }
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: hardware timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.
///
/// The value wraps at `u32::MAX`; consumers compare with `wrapping_sub`.
/// It must never go backward between wraps.
pub trait ClockPort {
    fn now_ms(&self) -> u32;
}

impl<T: ClockPort + ?Sized> ClockPort for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
