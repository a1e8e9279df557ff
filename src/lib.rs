//! Relay / solenoid driver library.
//!
//! Combines several logical gate inputs into one physical output and drives
//! it with a full-power pulse on every transition, followed by a reduced
//! PWM hold.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module, so the whole state
//! machine runs and tests on the host.  Building for an ESP-IDF target
//! requires the `espidf` feature, which pulls in the bindings those blocks
//! use.

#![deny(unused_must_use)]

#[cfg(all(target_os = "espidf", not(feature = "espidf")))]
compile_error!("target_os = \"espidf\" requires `--features espidf`");

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;

pub use app::ports::{ClockPort, OutputPort, PinId};
pub use config::RelayConfig;
pub use drivers::gates::CombineMode;
pub use drivers::relay::{PowerPhase, RelayDriver, TickAction, TickReport};
pub use drivers::shared::SharedRelay;
pub use error::{ActuatorError, Error, Result};
