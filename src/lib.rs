//! Shared items for the rotary-dial nixie master clock.
#![no_std]

mod clock_time;
mod debounce;
mod dial;
mod digit;
mod ds3231;
mod error;
mod four_bit_digit;
#[cfg(feature = "pico1")]
mod hardware;
mod master_loop;
mod never;
mod nixie_display;
mod offset_time;
mod output_array;
mod parallel_nixies;
mod rtc;
mod shared_constants;
mod tick;

// Re-export commonly used items
pub use clock_time::ClockTime;
pub use debounce::Bounce;
pub use dial::{DebouncedInput, PulseCount, RotaryDial};
pub use digit::Digit;
pub use ds3231::Ds3231;
pub use error::{Error, Result};
pub use four_bit_digit::FourBitDigit;
#[cfg(feature = "pico1")]
pub use hardware::Hardware;
pub use master_loop::MasterClock;
pub use never::Never;
pub use nixie_display::{DigitPosition, NixieDisplay};
pub use offset_time::TimeOffset;
pub use output_array::OutputArray;
pub use parallel_nixies::ParallelNixies;
pub use rtc::Rtc;
pub use shared_constants::*;
pub use tick::TickFlag;
