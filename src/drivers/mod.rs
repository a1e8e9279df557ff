//! Relay driver, gate logic, and peripheral helpers.

pub mod gates;
pub mod hw_init;
pub mod relay;
pub mod shared;
