//! Unified error types for the relay driver firmware.
//!
//! A single `Error` enum that every subsystem converts into.  All variants
//! are `Copy` so they can be handed back from the control tick without
//! allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A hardware write or configuration call failed.
    Actuator(ActuatorError),
    /// A gate index was outside `0..gate_count`.
    GateOutOfRange { gate: usize, gate_count: usize },
    /// A configuration value is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::GateOutOfRange { gate, gate_count } => {
                write!(f, "gate {gate} out of range (gate count {gate_count})")
            }
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

/// Failures reported by an [`OutputPort`](crate::app::ports::OutputPort).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// Pin could not be put into output mode.
    PinConfigFailed,
    /// PWM duty-cycle write failed.
    PwmWriteFailed,
    /// Carrier frequency could not be applied.
    FrequencyChangeFailed,
    /// The output has no way to change its carrier frequency.
    FrequencyUnsupported,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinConfigFailed => write!(f, "pin config failed"),
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::FrequencyChangeFailed => write!(f, "carrier frequency change failed"),
            Self::FrequencyUnsupported => write!(f, "carrier frequency not adjustable"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
