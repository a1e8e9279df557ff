//! Relay board firmware — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  GPIO inputs ──▶ gates ──▶ RelayDriver ──▶ LEDC PWM  │
//! │                              ▲                       │
//! │                      MonotonicClock                  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The control loop samples every gate input, feeds the relay drivers, and
//! ticks them at `CONTROL_TICK_MS`.
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::{info, warn};

use relaydriver::adapters::hardware::LedcOutput;
use relaydriver::adapters::time::MonotonicClock;
use relaydriver::config::VALVE_CONFIG_JSON;
use relaydriver::drivers::hw_init;
use relaydriver::pins;
use relaydriver::{RelayConfig, RelayDriver, TickReport};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("RelayDriver v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Inputs ─────────────────────────────────────────────
    hw_init::init_gpio_inputs(&[
        pins::VALVE_ARM_GPIO,
        pins::VALVE_DEMAND_GPIO,
        pins::AUX_SWITCH_GPIO,
    ])
    .map_err(|e| anyhow::anyhow!("input init: {e}"))?;

    // ── 3. Relays ─────────────────────────────────────────────
    let clock = MonotonicClock::new();

    let valve_config = RelayConfig::from_json(VALVE_CONFIG_JSON)
        .map_err(|e| anyhow::anyhow!("valve config: {e}"))?;
    let mut valve = RelayDriver::with_config(
        pins::VALVE_RELAY_GPIO,
        &valve_config,
        LedcOutput::new(pins::LEDC_CH_VALVE, pins::LEDC_TIMER_VALVE, pins::LEDC_BOOT_FREQ_HZ),
        &clock,
    )
    .map_err(|e| anyhow::anyhow!("valve relay: {e}"))?;

    let mut aux = RelayDriver::new(
        pins::AUX_RELAY_GPIO,
        LedcOutput::new(pins::LEDC_CH_AUX, pins::LEDC_TIMER_AUX, pins::LEDC_BOOT_FREQ_HZ),
        &clock,
    );

    info!("control loop @ {}ms", pins::CONTROL_TICK_MS);

    // ── 4. Control loop ───────────────────────────────────────
    let mut faults: u32 = 0;
    loop {
        valve.set_gate_value(0, hw_init::gpio_read(pins::VALVE_ARM_GPIO))?;
        valve.set_gate_value(1, hw_init::gpio_read(pins::VALVE_DEMAND_GPIO))?;
        aux.set_gate_value(0, hw_init::gpio_read(pins::AUX_SWITCH_GPIO))?;

        for report in [valve.run(), aux.run()] {
            count_fault(&report, &mut faults);
        }

        FreeRtos::delay_ms(pins::CONTROL_TICK_MS);
    }
}

fn count_fault(report: &TickReport, faults: &mut u32) {
    if report.fault.is_some() {
        *faults = faults.saturating_add(1);
        if faults.is_power_of_two() {
            warn!("relay hardware faults so far: {}", faults);
        }
    }
}
