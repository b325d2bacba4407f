//! Debounced digital input over an `embedded-hal` input pin.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::dial::DebouncedInput;

/// Filters a mechanically noisy switch into a clean settled level plus a
/// changed-since-last-poll flag.
///
/// A raw level change restarts the settle interval; the settled level flips
/// only once the raw signal has held the new level for the whole interval.
/// Poll [`update`](Bounce::update) at the same cadence as the consumer of the
/// signal (the dial polls at ≥100 Hz).
pub struct Bounce<P> {
    pin: P,
    interval: Duration,
    settled: bool,
    candidate: bool,
    last_flip: Instant,
}

impl<P: InputPin> Bounce<P> {
    /// Wrap a raw input pin with the given settle interval.
    ///
    /// The settled level starts out low; the first few polls after startup
    /// bring it in line with the physical signal.
    pub const fn new(pin: P, interval: Duration) -> Self {
        Self {
            pin,
            interval,
            settled: false,
            candidate: false,
            last_flip: Instant::MIN,
        }
    }
}

impl<P: InputPin> DebouncedInput for Bounce<P> {
    fn update(&mut self, now: Instant) -> bool {
        // A failed pin read keeps the previous raw level; on this hardware
        // GPIO reads are infallible.
        let raw = self.pin.is_high().unwrap_or(self.candidate);

        if raw != self.candidate {
            self.candidate = raw;
            self.last_flip = now;
        }

        if self.candidate != self.settled && now - self.last_flip >= self.interval {
            self.settled = self.candidate;
            return true;
        }
        false
    }

    fn read(&self) -> bool {
        self.settled
    }
}
