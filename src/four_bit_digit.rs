//! One display position's value, represented on four output bits.

use embedded_hal::digital::OutputPin;

use crate::digit::Digit;
use crate::shared_constants::BIT_COUNT;

/// A small integer value driven onto four binary-coded output lines.
///
/// Line 0 carries bit 0 (weight 1) through line 3 carrying bit 3 (weight 8).
/// [`set_value`](FourBitDigit::set_value) only stores the value;
/// [`commit`](FourBitDigit::commit) asserts it onto the lines. Used either
/// latched per position (see [`ParallelNixies`](crate::ParallelNixies)) or as
/// the shared value lines of the multiplexed display
/// ([`NixieDisplay`](crate::NixieDisplay)).
pub struct FourBitDigit<P> {
    lines: [P; BIT_COUNT],
    value: Digit,
}

impl<P: OutputPin> FourBitDigit<P> {
    /// Wrap four output lines, lowest-weight bit first. The stored value
    /// starts at 0; nothing is driven until the first commit.
    pub fn new(lines: [P; BIT_COUNT]) -> Self {
        Self {
            lines,
            value: Digit::ZERO,
        }
    }

    /// Store a pending value without touching the lines.
    pub fn set_value(&mut self, value: Digit) {
        self.value = value;
    }

    /// Assert the stored value's bit pattern onto the lines: bit N set
    /// drives line N high, otherwise low.
    pub fn commit(&mut self) -> Result<(), P::Error> {
        let bits = self.value.as_u8();
        for (position, line) in self.lines.iter_mut().enumerate() {
            let high = bits & (1 << position) != 0;
            line.set_state(high.into())?;
        }
        Ok(())
    }
}
