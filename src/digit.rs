//! A single display digit value, always in 0-9.

/// A digit value 0-9, as shown at one display position or dialed on the
/// rotary dial.
///
/// A raw pulse count of 10 from the dial conventionally represents the
/// dialed digit 0; see [`Digit::from_pulse_count`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// The digit 0.
    pub const ZERO: Self = Self(0);

    /// Create a digit, rejecting values outside 0-9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    /// Map a raw dial pulse count to a digit: 1-9 represent themselves,
    /// 10 represents 0. Anything else does not occur with an intact dial
    /// mechanism and is rejected.
    #[must_use]
    pub const fn from_pulse_count(count: u8) -> Option<Self> {
        match count {
            10 => Some(Self(0)),
            1..=9 => Some(Self(count)),
            _ => None,
        }
    }

    /// Decompose a value into its tens and ones digits.
    ///
    /// Total over all of `u8`: the tens digit is taken modulo 10, so a
    /// two-digit field (hour 0-23, minute/second 0-59) always renders its
    /// low two decimal places.
    #[must_use]
    pub const fn split(value: u8) -> (Self, Self) {
        (Self(value / 10 % 10), Self(value % 10))
    }

    /// The digit as a plain integer 0-9.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}
