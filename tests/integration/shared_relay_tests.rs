//! SharedRelay: gate updates from other threads while the control loop ticks.

use crate::mock_hw::MockOutput;
use relaydriver::{ClockPort, CombineMode, PowerPhase, RelayConfig, RelayDriver, SharedRelay, TickAction};
use std::sync::atomic::{AtomicU32, Ordering};

struct AtomicClock(AtomicU32);

impl ClockPort for AtomicClock {
    fn now_ms(&self) -> u32 {
        self.0.load(Ordering::Acquire)
    }
}

fn shared(clock: &AtomicClock, gates: u8) -> SharedRelay<MockOutput, &AtomicClock> {
    let config = RelayConfig {
        gate_count: gates,
        combine_mode: CombineMode::Or,
        ..RelayConfig::default()
    };
    SharedRelay::new(RelayDriver::with_config(9, &config, MockOutput::new(), clock).unwrap())
}

#[test]
fn delegates_to_driver() {
    let clock = AtomicClock(AtomicU32::new(0));
    let relay = shared(&clock, 1);

    relay.set_gate_value(0, true).unwrap();
    assert_eq!(relay.run().action, TickAction::Pulse { level: 255 });
    assert!(relay.logical_state());

    clock.0.store(201, Ordering::Release);
    assert!(matches!(relay.run().action, TickAction::Hold { .. }));

    relay.set_hold_power(20).unwrap();
    assert_eq!(
        relay.run().action,
        TickAction::Refresh {
            duty: 51,
            frequency_hz: 1_000
        }
    );

    assert!(relay.set_gate_value(1, true).is_err());
    assert!(relay.set_carrier_frequency(0).is_err());
}

#[test]
fn concurrent_gate_writers_land_before_tick() {
    let clock = AtomicClock(AtomicU32::new(0));
    let relay = shared(&clock, 4);

    std::thread::scope(|s| {
        for gate in 0..4 {
            let relay = &relay;
            s.spawn(move || {
                for _ in 0..100 {
                    relay.set_gate_value(gate, true).unwrap();
                    relay.set_gate_value(gate, false).unwrap();
                }
                relay.set_gate_value(gate, gate == 3).unwrap();
            });
        }
        s.spawn(|| {
            for _ in 0..100 {
                let _ = relay.run();
            }
        });
    });

    let _ = relay.run();
    assert!(relay.logical_state(), "gate 3 left high");

    let driver = relay.into_inner();
    assert_eq!(driver.gate_value(3), Some(true));
    assert_eq!(driver.gate_value(0), Some(false));
    assert_ne!(driver.phase(), PowerPhase::Off);
}

#[test]
fn disable_through_shared_handle() {
    let clock = AtomicClock(AtomicU32::new(0));
    let relay = shared(&clock, 1);
    relay.set_gate_value(0, true).unwrap();
    let _ = relay.run();

    relay.enable(false);
    assert_eq!(relay.run().action, TickAction::Pulse { level: 0 });
    assert_eq!(relay.phase(), PowerPhase::Off);

    clock.0.store(500, Ordering::Release);
    assert!(relay.run().is_idle());
    assert_eq!(relay.phase(), PowerPhase::Off);
}
