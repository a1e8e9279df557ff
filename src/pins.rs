//! GPIO / peripheral pin assignments for the relay board.
//!
//! Single source of truth — the firmware entry point references this module
//! rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Relay outputs (low-side MOSFET per coil, flyback diode on board)
// ---------------------------------------------------------------------------

/// Main solenoid valve.
pub const VALVE_RELAY_GPIO: i32 = 4;
/// Auxiliary relay.
pub const AUX_RELAY_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Gate inputs (active high, internal pull-down)
// ---------------------------------------------------------------------------

/// Valve gate 0: arm switch.
pub const VALVE_ARM_GPIO: i32 = 6;
/// Valve gate 1: demand input.
pub const VALVE_DEMAND_GPIO: i32 = 7;
/// Aux gate 0: latching switch.
pub const AUX_SWITCH_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// LEDC allocation
// ---------------------------------------------------------------------------

pub const LEDC_CH_VALVE: u32 = 0;
pub const LEDC_CH_AUX: u32 = 1;
/// Each relay gets its own timer so hold frequencies stay independent.
pub const LEDC_TIMER_VALVE: u32 = 0;
pub const LEDC_TIMER_AUX: u32 = 1;

/// Carrier programmed at attach time, before the first hold.
pub const LEDC_BOOT_FREQ_HZ: u32 = 1_000;

// ---------------------------------------------------------------------------
// Control loop
// ---------------------------------------------------------------------------

/// Tick interval.  Must stay well below the settle window.
pub const CONTROL_TICK_MS: u32 = 10;
