//! Latched driver variant: one four-bit unit per digit position.
//!
//! The earlier hardware revision gives every position its own driver board,
//! so all six digits stay lit continuously and only need rewriting when the
//! time changes. No multiplexing, no timing contract.

use embedded_hal::digital::OutputPin;

use crate::clock_time::ClockTime;
use crate::digit::Digit;
use crate::four_bit_digit::FourBitDigit;
use crate::nixie_display::DigitPosition;
use crate::shared_constants::CELL_COUNT;

/// Six independently latched digit units, in [`DigitPosition`] order.
pub struct ParallelNixies<P> {
    units: [FourBitDigit<P>; CELL_COUNT],
}

impl<P: OutputPin> ParallelNixies<P> {
    pub fn new(units: [FourBitDigit<P>; CELL_COUNT]) -> Self {
        Self { units }
    }

    /// Latch the full time onto all six positions.
    pub fn write_all(&mut self, time: &ClockTime) -> Result<(), P::Error> {
        for (position, unit) in DigitPosition::ALL.iter().zip(&mut self.units) {
            unit.set_value(position.value_in(time));
            unit.commit()?;
        }
        Ok(())
    }

    /// Latch one value onto every position (lamp-test pattern).
    pub fn set_all(&mut self, value: Digit) -> Result<(), P::Error> {
        for unit in &mut self.units {
            unit.set_value(value);
            unit.commit()?;
        }
        Ok(())
    }
}
