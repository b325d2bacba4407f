//! Mapping from dialed digits to clock adjustments.

use crate::digit::Digit;

/// A signed time adjustment, in seconds, selected by dialing a digit.
///
/// Digits 1 through 5 increment the time by increasing amounts; 6 through 9
/// and 0 mirror them as decrements:
///
/// | digit | offset | digit | offset |
/// |-------|--------|-------|--------|
/// | 1     | +1 s   | 6     | −1 h   |
/// | 2     | +10 s  | 7     | −10 m  |
/// | 3     | +1 m   | 8     | −1 m   |
/// | 4     | +10 m  | 9     | −10 s  |
/// | 5     | +1 h   | 0     | −1 s   |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOffset(i32);

impl TimeOffset {
    /// The adjustment a dialed digit stands for. Total over all digits.
    #[must_use]
    pub const fn from_digit(digit: Digit) -> Self {
        let seconds = match digit.as_u8() {
            1 => 1,
            2 => 10,
            3 => 60,
            4 => 600,
            5 => 3600,
            6 => -3600,
            7 => -600,
            8 => -60,
            9 => -10,
            _ => -1, // digit 0
        };
        Self(seconds)
    }

    /// The offset in seconds.
    #[must_use]
    pub const fn seconds(self) -> i32 {
        self.0
    }

    /// A zero offset adjusts nothing. Unreachable through the digit table,
    /// but callers guard on it anyway.
    #[must_use]
    pub const fn is_no_op(self) -> bool {
        self.0 == 0
    }
}
