//! Mock hardware for integration tests.
//!
//! Records every output call so tests can assert on the full hardware
//! history, and a hand-cranked millisecond clock.

use relaydriver::error::ActuatorError;
use relaydriver::{ClockPort, OutputPort, PinId};
use std::cell::Cell;

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum OutputCall {
    Configure { pin: PinId },
    Level { pin: PinId, level: u8 },
    Frequency { pin: PinId, hz: u32 },
}

// ── MockOutput ────────────────────────────────────────────────

pub struct MockOutput {
    pub calls: Vec<OutputCall>,
    pub fail_configure: bool,
    pub fail_writes: bool,
}

#[allow(dead_code)]
impl MockOutput {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fail_configure: false,
            fail_writes: false,
        }
    }

    pub fn last_call(&self) -> Option<&OutputCall> {
        self.calls.last()
    }

    pub fn levels(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                OutputCall::Level { level, .. } => Some(*level),
                _ => None,
            })
            .collect()
    }

    pub fn frequencies(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                OutputCall::Frequency { hz, .. } => Some(*hz),
                _ => None,
            })
            .collect()
    }

    pub fn configure_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, OutputCall::Configure { .. }))
            .count()
    }
}

impl Default for MockOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for MockOutput {
    fn configure_output(&mut self, pin: PinId) -> Result<(), ActuatorError> {
        self.calls.push(OutputCall::Configure { pin });
        if self.fail_configure {
            return Err(ActuatorError::PinConfigFailed);
        }
        Ok(())
    }

    fn write_level(&mut self, pin: PinId, level: u8) -> Result<(), ActuatorError> {
        self.calls.push(OutputCall::Level { pin, level });
        if self.fail_writes {
            return Err(ActuatorError::PwmWriteFailed);
        }
        Ok(())
    }

    fn set_carrier_frequency(&mut self, pin: PinId, hz: u32) -> Result<(), ActuatorError> {
        self.calls.push(OutputCall::Frequency { pin, hz });
        if self.fail_writes {
            return Err(ActuatorError::FrequencyChangeFailed);
        }
        Ok(())
    }
}

// ── SimClock ──────────────────────────────────────────────────

pub struct SimClock {
    now: Cell<u32>,
}

#[allow(dead_code)]
impl SimClock {
    pub fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }
}

impl ClockPort for SimClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
