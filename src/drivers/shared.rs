//! Relay driver behind a critical-section mutex.
//!
//! [`RelayDriver`] is single-writer: gate setters and `run()` are expected
//! on the same task.  When gate values arrive from another context (a GPIO
//! ISR, a comms task) wrap the driver in [`SharedRelay`] so the gate array
//! and the phase/timestamp fields are only ever touched under one lock.
//!
//! The lock is a blocking critical section, held for the duration of a
//! single call.  Closures passed to [`SharedRelay::with`] must not call back
//! into the same `SharedRelay`.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::app::ports::{ClockPort, OutputPort};
use crate::drivers::relay::{PowerPhase, RelayDriver, TickReport};
use crate::error::Result;

pub struct SharedRelay<O: OutputPort, C: ClockPort> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<RelayDriver<O, C>>>,
}

impl<O: OutputPort, C: ClockPort> SharedRelay<O, C> {
    pub fn new(driver: RelayDriver<O, C>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(driver)),
        }
    }

    /// Run `f` with exclusive access to the driver.
    pub fn with<R>(&self, f: impl FnOnce(&mut RelayDriver<O, C>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    pub fn run(&self) -> TickReport {
        self.with(|relay| relay.run())
    }

    pub fn set_gate_value(&self, gate: usize, value: bool) -> Result<()> {
        self.with(|relay| relay.set_gate_value(gate, value))
    }

    pub fn set_hold_power(&self, percent: u8) -> Result<()> {
        self.with(|relay| relay.set_hold_power(percent))
    }

    pub fn set_carrier_frequency(&self, hz: u32) -> Result<()> {
        self.with(|relay| relay.set_carrier_frequency(hz))
    }

    pub fn enable(&self, enabled: bool) {
        self.with(|relay| relay.enable(enabled));
    }

    pub fn phase(&self) -> PowerPhase {
        self.with(|relay| relay.phase())
    }

    pub fn logical_state(&self) -> bool {
        self.with(|relay| relay.logical_state())
    }

    /// Recover the driver.
    pub fn into_inner(self) -> RelayDriver<O, C> {
        self.inner.into_inner().into_inner()
    }
}
