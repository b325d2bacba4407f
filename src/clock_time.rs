//! Wall-clock time of day, as read from and written to the realtime clock.

use crate::shared_constants::SECONDS_PER_DAY;

/// Hour, minute, and second of a 24-hour day.
///
/// This is the shared time state: written once per second from the realtime
/// clock by the tick handler and read by the display multiplexer on every
/// refresh. Everything runs on one cooperative thread, so no synchronization
/// is needed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockTime {
    /// Create a time of day, rejecting out-of-range fields.
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour <= 23 && minute <= 59 && second <= 59 {
            Some(Self {
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    /// Seconds since midnight.
    #[must_use]
    pub const fn seconds_of_day(self) -> i32 {
        self.hour as i32 * 3600 + self.minute as i32 * 60 + self.second as i32
    }

    /// Add a (possibly negative) number of seconds, wrapping around the
    /// 24-hour day in both directions.
    #[must_use]
    pub const fn wrapping_add_seconds(self, seconds: i32) -> Self {
        let total = (self.seconds_of_day() + seconds % SECONDS_PER_DAY + SECONDS_PER_DAY)
            % SECONDS_PER_DAY;
        Self {
            hour: (total / 3600) as u8,
            minute: (total % 3600 / 60) as u8,
            second: (total % 60) as u8,
        }
    }
}
