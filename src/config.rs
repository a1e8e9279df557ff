//! Relay output configuration.
//!
//! Every tunable for one relay output.  Defaults reproduce the reference
//! behaviour: one gate, OR combine, non-inverted, 50 % hold at 1 kHz after a
//! 200 ms full-power pulse.

use log::info;
use serde::{Deserialize, Serialize};

use crate::drivers::gates::{CombineMode, MAX_GATES};
use crate::error::{Error, Result};

/// Default settle window between the full-power pulse and PWM hold.
pub const DEFAULT_SETTLE_MS: u32 = 200;
/// Default hold duty cycle (percent).
pub const DEFAULT_HOLD_POWER_PERCENT: u8 = 50;
/// Default hold-phase carrier frequency.
pub const DEFAULT_PWM_FREQUENCY_HZ: u32 = 1_000;

/// Board valve relay: armed AND demanded, 35 % hold above the audible range.
pub const VALVE_CONFIG_JSON: &str = r#"{
    "gate_count": 2,
    "combine_mode": "and",
    "hold_power_percent": 35,
    "pwm_frequency_hz": 20000
}"#;

/// Per-output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    // --- Gate logic ---
    /// Number of independent gates folded into the output (1..=MAX_GATES)
    pub gate_count: u8,
    /// Fold applied across the gates
    pub combine_mode: CombineMode,
    /// Flip physical polarity relative to logical state
    pub invert: bool,

    // --- Power profile ---
    /// Hold-phase duty cycle (0-100%)
    pub hold_power_percent: u8,
    /// Hold-phase PWM carrier frequency in Hz
    pub pwm_frequency_hz: u32,
    /// Full-power pulse length before dropping to hold (milliseconds)
    pub settle_ms: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            gate_count: 1,
            combine_mode: CombineMode::Or,
            invert: false,

            hold_power_percent: DEFAULT_HOLD_POWER_PERCENT,
            pwm_frequency_hz: DEFAULT_PWM_FREQUENCY_HZ,
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }
}

impl RelayConfig {
    /// Reject out-of-range values.  Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        if self.gate_count == 0 {
            return Err(Error::Config("gate_count must be at least 1"));
        }
        if self.gate_count as usize > MAX_GATES {
            return Err(Error::Config("gate_count exceeds MAX_GATES"));
        }
        validate_hold_power(self.hold_power_percent)?;
        validate_frequency(self.pwm_frequency_hz)?;
        Ok(())
    }

    /// Parse and validate a JSON document.  Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed relay config JSON"))?;
        config.validate()?;
        info!(
            "relay config: gates={} mode={:?} invert={} hold={}% @ {}Hz settle={}ms",
            config.gate_count,
            config.combine_mode,
            config.invert,
            config.hold_power_percent,
            config.pwm_frequency_hz,
            config.settle_ms,
        );
        Ok(config)
    }
}

pub(crate) fn validate_hold_power(percent: u8) -> Result<()> {
    if percent > 100 {
        return Err(Error::Config("hold_power_percent must be 0-100"));
    }
    Ok(())
}

pub(crate) fn validate_frequency(hz: u32) -> Result<()> {
    if hz == 0 {
        return Err(Error::Config("pwm_frequency_hz must be non-zero"));
    }
    Ok(())
}
