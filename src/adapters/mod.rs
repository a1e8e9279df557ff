//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements  | Connects to                    |
//! |------------|-------------|--------------------------------|
//! | `hardware` | OutputPort  | ESP32 LEDC channel + timer     |
//! | `hal`      | OutputPort  | any embedded-hal PWM channel   |
//! | `time`     | ClockPort   | ESP32 system timer / `Instant` |

pub mod hal;
pub mod hardware;
pub mod time;
