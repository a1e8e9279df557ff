//! Gate-combining relay / solenoid driver with a two-phase power profile.
//!
//! Coils need more current to pull in than to stay pulled in.  Every change
//! of logical state therefore drives the output rail fully on (or fully
//! off) for a settle window, after which the output drops to a reduced PWM
//! hold duty at a configurable carrier frequency.
//!
//! ## Phase table
//!
//! | Phase | Entered when                        | Output on entry                        |
//! |-------|-------------------------------------|----------------------------------------|
//! | Off   | construction, or logical 1 -> 0     | off level (`invert` as full scale)     |
//! | Pulse | logical 0 -> 1                      | full scale at `logical ^ invert`       |
//! | Hold  | `settle_ms` elapsed since pulse     | hold duty + carrier frequency          |
//!
//! Only an energised output settles into `Hold`; `Off` stays put until the
//! next transition.  A hold-parameter change while in `Hold` raises a
//! refresh flag; the next tick rewrites duty and frequency without
//! re-entering `Pulse`.
//!
//! ## Tick contract
//!
//! [`RelayDriver::run`] never blocks.  It is driven from the control loop
//! at an interval well below `settle_ms`.  Once settled with unchanged
//! inputs a tick performs no hardware writes at all.

use log::{debug, warn};

use crate::app::ports::{ClockPort, FULL_SCALE, OutputPort, PinId};
use crate::config::{self, RelayConfig};
use crate::drivers::gates::{CombineMode, GateBank};
use crate::error::{ActuatorError, Result};

/// Power phase of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerPhase {
    /// Output de-energised: before the first transition or after a 1 -> 0
    /// transition.  No hold write follows.
    Off = 0,
    /// Reduced-duty PWM hold.
    Hold = 1,
    /// Full-power pulse after a transition.
    Pulse = 2,
}

/// Hardware action taken by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// No hardware write.
    Idle,
    /// Transition: full-scale write (on or off level).
    Pulse { level: u8 },
    /// Settle window elapsed: hold duty and carrier written.
    Hold { duty: u8, frequency_hz: u32 },
    /// Hold parameters changed: duty and carrier rewritten.
    Refresh { duty: u8, frequency_hz: u32 },
}

/// Outcome of [`RelayDriver::run`].
///
/// A hardware fault does not stop the phase machine; it is surfaced here
/// for the caller to log or count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub action: TickAction,
    pub fault: Option<ActuatorError>,
}

impl TickReport {
    const fn idle() -> Self {
        Self {
            action: TickAction::Idle,
            fault: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.action, TickAction::Idle)
    }
}

/// Scale a 0–100 percentage to an 8-bit duty and apply polarity.
pub fn hold_duty(percent: u8, invert: bool) -> u8 {
    let duty = (u16::from(percent.min(100)) * u16::from(FULL_SCALE) / 100) as u8;
    if invert { FULL_SCALE - duty } else { duty }
}

/// Full-scale level for the pulse phase.
pub fn pulse_level(logical: bool, invert: bool) -> u8 {
    if logical ^ invert { FULL_SCALE } else { 0 }
}

/// One physical relay output.
///
/// Owns its gate values exclusively; the pin must not be shared with another
/// driver instance.
pub struct RelayDriver<O: OutputPort, C: ClockPort> {
    pin: PinId,
    output: O,
    clock: C,

    gates: GateBank,
    combine_mode: CombineMode,
    invert: bool,
    enabled: bool,

    logical_state: bool,
    last_logical_state: bool,
    phase: PowerPhase,
    phase_start_ms: u32,
    refresh_pending: bool,

    hold_power_percent: u8,
    pwm_frequency_hz: u32,
    settle_ms: u32,

    pin_initialized: bool,
}

impl<O: OutputPort, C: ClockPort> RelayDriver<O, C> {
    /// Single-gate, OR, non-inverted driver with default hold parameters.
    /// Touches no hardware until the first [`run`](Self::run).
    pub fn new(pin: PinId, output: O, clock: C) -> Self {
        let defaults = RelayConfig::default();
        Self::build(pin, output, clock, &defaults, GateBank::single())
    }

    /// Validate `config` and build a driver from it.
    pub fn with_config(pin: PinId, config: &RelayConfig, output: O, clock: C) -> Result<Self> {
        config.validate()?;
        let gates = GateBank::new(config.gate_count as usize)?;
        Ok(Self::build(pin, output, clock, config, gates))
    }

    fn build(pin: PinId, output: O, clock: C, config: &RelayConfig, gates: GateBank) -> Self {
        Self {
            pin,
            output,
            clock,
            gates,
            combine_mode: config.combine_mode,
            invert: config.invert,
            enabled: true,
            logical_state: false,
            last_logical_state: false,
            phase: PowerPhase::Off,
            phase_start_ms: 0,
            refresh_pending: false,
            hold_power_percent: config.hold_power_percent,
            pwm_frequency_hz: config.pwm_frequency_hz,
            settle_ms: config.settle_ms,
            pin_initialized: false,
        }
    }

    // ── Tick ──────────────────────────────────────────────────────

    /// Advance the state machine by one control-loop tick.
    pub fn run(&mut self) -> TickReport {
        if !self.pin_initialized {
            if let Err(e) = self.output.configure_output(self.pin) {
                warn!("relay pin {}: output config failed: {}", self.pin, e);
                return TickReport {
                    action: TickAction::Idle,
                    fault: Some(e),
                };
            }
            self.pin_initialized = true;
            debug!("relay pin {}: configured for output", self.pin);
        }

        self.logical_state = if self.enabled {
            self.gates.combine(self.combine_mode)
        } else {
            false
        };

        let now = self.clock.now_ms();

        if self.logical_state != self.last_logical_state {
            return self.enter_pulse(now);
        }

        match self.phase {
            PowerPhase::Pulse if now.wrapping_sub(self.phase_start_ms) > self.settle_ms => {
                self.enter_hold(false)
            }
            PowerPhase::Hold if self.refresh_pending => self.enter_hold(true),
            _ => TickReport::idle(),
        }
    }

    fn enter_pulse(&mut self, now: u32) -> TickReport {
        let level = pulse_level(self.logical_state, self.invert);
        let fault = self.output.write_level(self.pin, level).err();

        self.phase = if self.logical_state {
            PowerPhase::Pulse
        } else {
            PowerPhase::Off
        };
        self.phase_start_ms = now;
        self.last_logical_state = self.logical_state;
        self.refresh_pending = false;

        debug!(
            "relay pin {}: logical={} -> {:?} level={}",
            self.pin, self.logical_state, self.phase, level
        );
        self.report(TickAction::Pulse { level }, fault)
    }

    fn enter_hold(&mut self, refresh: bool) -> TickReport {
        let duty = hold_duty(self.hold_power_percent, self.invert);
        let frequency_hz = self.pwm_frequency_hz;

        let write = self.output.write_level(self.pin, duty);
        let carrier = self.output.set_carrier_frequency(self.pin, frequency_hz);

        self.phase = PowerPhase::Hold;
        self.refresh_pending = false;

        let action = if refresh {
            debug!("relay pin {}: HOLD refresh duty={} @ {}Hz", self.pin, duty, frequency_hz);
            TickAction::Refresh { duty, frequency_hz }
        } else {
            debug!("relay pin {}: -> HOLD duty={} @ {}Hz", self.pin, duty, frequency_hz);
            TickAction::Hold { duty, frequency_hz }
        };
        self.report(action, write.and(carrier).err())
    }

    fn report(&self, action: TickAction, fault: Option<ActuatorError>) -> TickReport {
        if let Some(e) = fault {
            warn!("relay pin {}: {:?} write failed: {}", self.pin, action, e);
        }
        TickReport { action, fault }
    }

    // ── Mutators ──────────────────────────────────────────────────

    /// Store a gate value.  Takes effect on the next tick.
    pub fn set_gate_value(&mut self, gate: usize, value: bool) -> Result<()> {
        self.gates.set(gate, value)
    }

    /// Change the hold duty (0–100).  Refreshes in place when holding.
    pub fn set_hold_power(&mut self, percent: u8) -> Result<()> {
        config::validate_hold_power(percent)?;
        self.hold_power_percent = percent;
        self.request_refresh();
        Ok(())
    }

    /// Change the hold carrier frequency.  Refreshes in place when holding.
    pub fn set_carrier_frequency(&mut self, hz: u32) -> Result<()> {
        config::validate_frequency(hz)?;
        self.pwm_frequency_hz = hz;
        self.request_refresh();
        Ok(())
    }

    /// Change the pulse length used from the next transition on.
    pub fn set_settle_ms(&mut self, ms: u32) {
        self.settle_ms = ms;
    }

    /// Enable or disable the output.  Disabled forces logical state to 0.
    pub fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn disable(&mut self) {
        self.enable(false);
    }

    fn request_refresh(&mut self) {
        if self.phase == PowerPhase::Hold {
            self.refresh_pending = true;
        }
    }

    // ── Accessors ─────────────────────────────────────────────────

    pub fn pin(&self) -> PinId {
        self.pin
    }

    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    pub fn gate_value(&self, gate: usize) -> Option<bool> {
        self.gates.get(gate)
    }

    pub fn combine_mode(&self) -> CombineMode {
        self.combine_mode
    }

    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Logical state computed by the most recent tick.
    pub fn logical_state(&self) -> bool {
        self.logical_state
    }

    pub fn phase(&self) -> PowerPhase {
        self.phase
    }

    /// Clock reading at the most recent transition.
    pub fn phase_start_ms(&self) -> u32 {
        self.phase_start_ms
    }

    pub fn is_refresh_pending(&self) -> bool {
        self.refresh_pending
    }

    pub fn hold_power_percent(&self) -> u8 {
        self.hold_power_percent
    }

    pub fn pwm_frequency_hz(&self) -> u32 {
        self.pwm_frequency_hz
    }

    pub fn settle_ms(&self) -> u32 {
        self.settle_ms
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
