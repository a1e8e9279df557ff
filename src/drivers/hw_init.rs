//! Register-level peripheral helpers.
//!
//! GPIO direction setup and LEDC timer/channel control using raw ESP-IDF
//! sys calls.  On non-espidf targets every helper is a no-op that reports
//! success, so the adapters above them run unchanged on the host.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

// ── Error type ────────────────────────────────────────────────

/// Errors from peripheral configuration and register writes.
/// Carries the raw `esp_err_t` where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    LedcTimerFailed(i32),
    LedcChannelFailed(i32),
    LedcDutyFailed(i32),
    LedcFreqFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc)  => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcTimerFailed(rc)   => write!(f, "LEDC timer config failed (rc={})", rc),
            Self::LedcChannelFailed(rc) => write!(f, "LEDC channel config failed (rc={})", rc),
            Self::LedcDutyFailed(rc)    => write!(f, "LEDC duty update failed (rc={})", rc),
            Self::LedcFreqFailed(rc)    => write!(f, "LEDC frequency change failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
fn check(ret: esp_err_t, err: fn(i32) -> HwInitError) -> Result<(), HwInitError> {
    if ret == ESP_OK as esp_err_t { Ok(()) } else { Err(err(ret)) }
}

// ── GPIO Inputs ───────────────────────────────────────────────

/// Configure `pins` as pulled-down inputs with interrupts disabled.
#[cfg(target_os = "espidf")]
pub fn init_gpio_inputs(pins: &[i32]) -> Result<(), HwInitError> {
    for &pin in pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: gpio_config reads the struct and programs the IO mux;
        // called from the main task before the control loop starts.
        check(unsafe { gpio_config(&cfg) }, HwInitError::GpioConfigFailed)?;
    }
    info!("hw_init: {} GPIO inputs configured", pins.len());
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_gpio_inputs(_pins: &[i32]) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): GPIO input init skipped");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    false
}

// ── LEDC PWM ─────────────────────────────────────────────────

/// Bind `gpio` to LEDC `channel` driven by `timer` at `freq_hz`, 8-bit,
/// output held low.
#[cfg(target_os = "espidf")]
pub fn ledc_attach(channel: u32, timer: u32, gpio: i32, freq_hz: u32) -> Result<(), HwInitError> {
    let timer_cfg = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: timer,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: LEDC config calls copy the struct; main-task context only.
    check(unsafe { ledc_timer_config(&timer_cfg) }, HwInitError::LedcTimerFailed)?;

    let channel_cfg = ledc_channel_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        channel,
        timer_sel: timer,
        gpio_num: gpio,
        duty: 0,
        hpoint: 0,
        ..Default::default()
    };
    check(unsafe { ledc_channel_config(&channel_cfg) }, HwInitError::LedcChannelFailed)?;

    info!("hw_init: GPIO{} on LEDC CH{} / TIMER{} @ {}Hz", gpio, channel, timer, freq_hz);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_attach(_channel: u32, _timer: u32, _gpio: i32, _freq_hz: u32) -> Result<(), HwInitError> {
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u8) -> Result<(), HwInitError> {
    // SAFETY: channel was configured by ledc_attach(); duty register
    // writes are race-free since only the main loop calls this function.
    unsafe {
        check(
            ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty as u32),
            HwInitError::LedcDutyFailed,
        )?;
        check(
            ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel),
            HwInitError::LedcDutyFailed,
        )
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u8) -> Result<(), HwInitError> {
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set_frequency(timer: u32, freq_hz: u32) -> Result<(), HwInitError> {
    // SAFETY: timer was configured by ledc_attach(); main-loop only.
    check(
        unsafe { ledc_set_freq(ledc_mode_t_LEDC_LOW_SPEED_MODE, timer, freq_hz) },
        HwInitError::LedcFreqFailed,
    )
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set_frequency(_timer: u32, _freq_hz: u32) -> Result<(), HwInitError> {
    Ok(())
}
