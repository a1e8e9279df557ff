//! Fuzz target: `RelayConfig::from_json`
//!
//! Arbitrary bytes as a config document.  Parsing must never panic, and any
//! config it accepts must build a driver.
//!
//! cargo fuzz run fuzz_relay_config

#![no_main]

use libfuzzer_sys::fuzz_target;
use relaydriver::error::ActuatorError;
use relaydriver::{ClockPort, OutputPort, PinId, RelayConfig, RelayDriver};

struct NullOutput;

impl OutputPort for NullOutput {
    fn configure_output(&mut self, _pin: PinId) -> Result<(), ActuatorError> {
        Ok(())
    }
    fn write_level(&mut self, _pin: PinId, _level: u8) -> Result<(), ActuatorError> {
        Ok(())
    }
    fn set_carrier_frequency(&mut self, _pin: PinId, _hz: u32) -> Result<(), ActuatorError> {
        Ok(())
    }
}

struct ZeroClock;

impl ClockPort for ZeroClock {
    fn now_ms(&self) -> u32 {
        0
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = RelayConfig::from_json(text) {
        let mut relay = RelayDriver::with_config(0, &config, NullOutput, ZeroClock)
            .expect("validated config must build a driver");
        for gate in 0..relay.gate_count() {
            relay.set_gate_value(gate, true).expect("gate within count");
        }
        let _ = relay.run();
    }
});
