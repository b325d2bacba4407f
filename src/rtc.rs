//! The realtime-clock device capability.

use crate::clock_time::ClockTime;
use crate::error::Result;

/// A battery-backed source of wall time and sink for time adjustments.
///
/// The clock chip is the single source of truth: dialed adjustments are
/// written back to it, never to the in-memory time state, which catches up
/// on the next once-per-second tick.
pub trait Rtc {
    /// Probe the device and configure its once-per-second output.
    ///
    /// Returns [`Error::RtcNotFound`](crate::Error::RtcNotFound) when the
    /// device does not respond; a clock with no clock chip has no useful
    /// behavior, so callers treat that as fatal.
    fn begin(&mut self) -> Result<()>;

    /// The current time of day.
    fn now(&mut self) -> Result<ClockTime>;

    /// Set the time of day.
    fn adjust(&mut self, time: ClockTime) -> Result<()>;

    /// Whether the device lost battery backup since the last time set.
    /// Informational only - logged, not acted upon.
    fn lost_power(&mut self) -> Result<bool>;
}
