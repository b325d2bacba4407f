//! Time-multiplexed driver for the six-digit nixie display.
//!
//! The six positions share one set of four value (cathode) lines, so only one
//! position can be lit at a time. [`NixieDisplay::refresh_tick`] lights the
//! positions in a fixed cycle at [`MULTIPLEX_PERIOD`](crate::MULTIPLEX_PERIOD)
//! (1 kHz by default); persistence of vision makes all six appear lit at
//! once. Flicker becomes visible well under ~500 Hz, so other work in the
//! cooperative loop must not starve the refresh.

use embedded_hal::digital::OutputPin;

use crate::clock_time::ClockTime;
use crate::digit::Digit;
use crate::four_bit_digit::FourBitDigit;
use crate::output_array::OutputArray;
use crate::shared_constants::CELL_COUNT;

/// One of the six digit positions, in multiplex order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    HourTens,
    HourOnes,
    MinuteTens,
    MinuteOnes,
    SecondTens,
    SecondOnes,
}

impl DigitPosition {
    /// All positions in multiplex order.
    pub const ALL: [Self; CELL_COUNT] = [
        Self::HourTens,
        Self::HourOnes,
        Self::MinuteTens,
        Self::MinuteOnes,
        Self::SecondTens,
        Self::SecondOnes,
    ];

    /// The next position in the cycle, wrapping after the seconds-ones.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::HourTens => Self::HourOnes,
            Self::HourOnes => Self::MinuteTens,
            Self::MinuteTens => Self::MinuteOnes,
            Self::MinuteOnes => Self::SecondTens,
            Self::SecondTens => Self::SecondOnes,
            Self::SecondOnes => Self::HourTens,
        }
    }

    /// The digit shown at this position for the given time.
    #[must_use]
    pub const fn value_in(self, time: &ClockTime) -> Digit {
        match self {
            Self::HourTens => Digit::split(time.hour).0,
            Self::HourOnes => Digit::split(time.hour).1,
            Self::MinuteTens => Digit::split(time.minute).0,
            Self::MinuteOnes => Digit::split(time.minute).1,
            Self::SecondTens => Digit::split(time.second).0,
            Self::SecondOnes => Digit::split(time.second).1,
        }
    }

    /// Index of this position's anode line.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The multiplexing display driver: six position-select anodes plus four
/// shared value lines.
pub struct NixieDisplay<P> {
    anodes: OutputArray<P, CELL_COUNT>,
    value_lines: FourBitDigit<P>,
    position: DigitPosition,
}

impl<P: OutputPin> NixieDisplay<P> {
    /// Wrap the anode lines (in [`DigitPosition`] order) and the shared
    /// value lines. The first refresh lights the hour-tens position.
    pub fn new(anodes: OutputArray<P, CELL_COUNT>, value_lines: FourBitDigit<P>) -> Self {
        Self {
            anodes,
            value_lines,
            position: DigitPosition::SecondOnes,
        }
    }

    /// The position lit by the most recent refresh.
    #[must_use]
    pub const fn position(&self) -> DigitPosition {
        self.position
    }

    /// Advance the multiplex cycle by one position.
    ///
    /// Blanks every anode before asserting the next value so that no two
    /// positions are ever lit at once and values never ghost across
    /// positions sharing the cathode lines.
    pub fn refresh_tick(&mut self, time: &ClockTime) -> Result<(), P::Error> {
        self.anodes.set_all_low()?;

        let next = self.position.next();
        self.value_lines.set_value(next.value_in(time));
        self.value_lines.commit()?;
        self.anodes.set(next.index(), true)?;

        self.position = next;
        Ok(())
    }
}
