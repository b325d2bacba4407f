use embedded_hal::digital::OutputPin;

/// A fixed-size group of digital output lines addressed by index.
///
/// The display's six position-select anodes are one of these; bounds are
/// checked by construction (the index always comes from a
/// [`DigitPosition`](crate::DigitPosition) variant).
pub struct OutputArray<P, const N: usize>([P; N]);

impl<P: OutputPin, const N: usize> OutputArray<P, N> {
    pub fn new(outputs: [P; N]) -> Self {
        Self(outputs)
    }

    /// Drive every line low.
    #[inline]
    pub fn set_all_low(&mut self) -> Result<(), P::Error> {
        for output in &mut self.0 {
            output.set_low()?;
        }
        Ok(())
    }

    /// Drive one line high or low. Out-of-range indexes are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, high: bool) -> Result<(), P::Error> {
        if let Some(output) = self.0.get_mut(index) {
            output.set_state(high.into())?;
        }
        Ok(())
    }
}
