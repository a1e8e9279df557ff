//! Application boundary.
//!
//! The relay state machine lives in [`crate::drivers`]; everything it needs
//! from the outside world is expressed as a port trait in [`ports`], which
//! keeps the driver testable without real peripherals.

pub mod ports;
