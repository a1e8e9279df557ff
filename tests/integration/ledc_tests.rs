//! RelayDriver over the LEDC adapter (host simulation of the channel).

use crate::mock_hw::SimClock;
use relaydriver::adapters::hardware::LedcOutput;
use relaydriver::{RelayConfig, RelayDriver, TickAction};

#[test]
fn ledc_channel_follows_pulse_then_hold() {
    let clock = SimClock::new(0);
    let config = RelayConfig {
        hold_power_percent: 35,
        pwm_frequency_hz: 20_000,
        ..RelayConfig::default()
    };
    let mut relay =
        RelayDriver::with_config(21, &config, LedcOutput::new(0, 0, 1_000), &clock).unwrap();

    assert!(!relay.output().is_attached());
    relay.set_gate_value(0, true).unwrap();
    assert_eq!(relay.run().action, TickAction::Pulse { level: 255 });
    assert!(relay.output().is_attached());
    assert_eq!(relay.output().level(), 255);
    assert_eq!(relay.output().frequency_hz(), 1_000);

    clock.advance(201);
    let report = relay.run();
    assert_eq!(
        report.action,
        TickAction::Hold {
            duty: 89,
            frequency_hz: 20_000
        }
    );
    assert_eq!(report.fault, None);
    assert_eq!(relay.output().level(), 89);
    assert_eq!(relay.output().frequency_hz(), 20_000);

    relay.set_gate_value(0, false).unwrap();
    assert_eq!(relay.run().action, TickAction::Pulse { level: 0 });
    assert_eq!(relay.output().level(), 0);
}
