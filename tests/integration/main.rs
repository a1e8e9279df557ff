//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the relay driver against
//! mock adapters.  All tests run on the host (x86_64) with no real hardware
//! required.

mod ledc_tests;
mod mock_hw;
mod shared_relay_tests;
